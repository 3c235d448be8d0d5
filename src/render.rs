//! Glyph tables and tree rendering.

use crate::config::{RunConfig, TreeStyle};
use crate::walker::Entry;

/// Connector glyphs for one style: branch, last branch, vertical run,
/// and the blank column under a finished branch.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub branch: &'static str,
    pub last_branch: &'static str,
    pub vertical: &'static str,
    pub blank: &'static str,
}

/// Fixed lookup table keyed by style.
pub fn glyphs(style: TreeStyle) -> Glyphs {
    match style {
        TreeStyle::Ascii => Glyphs {
            branch: "|-- ",
            last_branch: "+-- ",
            vertical: "|   ",
            blank: "    ",
        },
        TreeStyle::Unicode => Glyphs {
            branch: "├── ",
            last_branch: "└── ",
            vertical: "│   ",
            blank: "    ",
        },
        TreeStyle::Bold => Glyphs {
            branch: "┣━━ ",
            last_branch: "┗━━ ",
            vertical: "┃   ",
            blank: "    ",
        },
        TreeStyle::Minimal => Glyphs {
            branch: "|-- ",
            last_branch: "`-- ",
            vertical: "|   ",
            blank: "    ",
        },
    }
}

/// Marker appended to directories whose listing failed.
pub const DENIED_SUFFIX: &str = " [unreadable]";

/// Renders a materialized entry tree into plain output lines.
///
/// Color is a sink concern: lines never carry escape codes here.
pub struct Renderer {
    glyphs: Glyphs,
}

impl Renderer {
    pub fn new(config: &RunConfig) -> Self {
        Self {
            glyphs: glyphs(config.style),
        }
    }

    /// Produce one line per visible entry, root first. The root line is
    /// the bare name with a directory marker and no connector.
    pub fn render(&self, root: &Entry) -> Vec<String> {
        let mut lines = vec![format!("{}/", root.name())];
        if let Entry::Dir { children, .. } = root {
            self.render_children(children, "", &mut lines);
        }
        lines
    }

    fn render_children(&self, children: &[Entry], prefix: &str, lines: &mut Vec<String>) {
        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            let connector = if is_last {
                self.glyphs.last_branch
            } else {
                self.glyphs.branch
            };

            match child {
                Entry::File { name, .. } => {
                    lines.push(format!("{}{}{}", prefix, connector, name));
                }
                Entry::Dir {
                    name,
                    children,
                    denied,
                    ..
                } => {
                    let marker = if *denied { DENIED_SUFFIX } else { "" };
                    lines.push(format!("{}{}{}/{}", prefix, connector, name, marker));

                    let continuation = if is_last {
                        self.glyphs.blank
                    } else {
                        self.glyphs.vertical
                    };
                    let child_prefix = format!("{}{}", prefix, continuation);
                    self.render_children(children, &child_prefix, lines);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortMode;
    use crate::filter::FilterPolicy;
    use crate::output::Destination;

    fn config(style: TreeStyle) -> RunConfig {
        RunConfig {
            root: ".".into(),
            max_depth: None,
            sort: SortMode::DirsFirst,
            style,
            show_stats: false,
            use_color: false,
            destination: Destination::Stdout,
            filter: FilterPolicy::default(),
        }
    }

    fn file(name: &str, depth: usize) -> Entry {
        Entry::File {
            name: name.to_string(),
            depth,
        }
    }

    fn dir(name: &str, depth: usize, children: Vec<Entry>) -> Entry {
        Entry::Dir {
            name: name.to_string(),
            depth,
            children,
            denied: false,
        }
    }

    /// The scenario tree: src/ (main.py, utils.py), tests/ (test_main.py),
    /// README.md, setup.py.
    fn sample_tree() -> Entry {
        dir(
            "project",
            0,
            vec![
                dir("src", 1, vec![file("main.py", 2), file("utils.py", 2)]),
                dir("tests", 1, vec![file("test_main.py", 2)]),
                file("README.md", 1),
                file("setup.py", 1),
            ],
        )
    }

    #[test]
    fn test_ascii_render() {
        let lines = Renderer::new(&config(TreeStyle::Ascii)).render(&sample_tree());
        assert_eq!(
            lines,
            vec![
                "project/",
                "|-- src/",
                "|   |-- main.py",
                "|   +-- utils.py",
                "|-- tests/",
                "|   +-- test_main.py",
                "|-- README.md",
                "+-- setup.py",
            ]
        );
    }

    #[test]
    fn test_unicode_render() {
        let lines = Renderer::new(&config(TreeStyle::Unicode)).render(&sample_tree());
        assert_eq!(
            lines,
            vec![
                "project/",
                "├── src/",
                "│   ├── main.py",
                "│   └── utils.py",
                "├── tests/",
                "│   └── test_main.py",
                "├── README.md",
                "└── setup.py",
            ]
        );
    }

    #[test]
    fn test_minimal_last_branch() {
        let tree = dir("root", 0, vec![file("only.txt", 1)]);
        let lines = Renderer::new(&config(TreeStyle::Minimal)).render(&tree);
        assert_eq!(lines, vec!["root/", "`-- only.txt"]);
    }

    #[test]
    fn test_bold_render() {
        let tree = dir("root", 0, vec![dir("a", 1, vec![file("f", 2)]), file("b", 1)]);
        let lines = Renderer::new(&config(TreeStyle::Bold)).render(&tree);
        assert_eq!(lines, vec!["root/", "┣━━ a/", "┃   ┗━━ f", "┗━━ b"]);
    }

    #[test]
    fn test_styles_differ_only_in_glyphs() {
        let ascii = Renderer::new(&config(TreeStyle::Ascii)).render(&sample_tree());
        let unicode = Renderer::new(&config(TreeStyle::Unicode)).render(&sample_tree());

        assert_eq!(ascii.len(), unicode.len());
        let mapped: Vec<String> = unicode
            .iter()
            .map(|line| {
                line.replace("├── ", "|-- ")
                    .replace("└── ", "+-- ")
                    .replace("│   ", "|   ")
            })
            .collect();
        assert_eq!(ascii, mapped);
    }

    #[test]
    fn test_denied_directory_marker() {
        let tree = dir(
            "root",
            0,
            vec![Entry::Dir {
                name: "locked".to_string(),
                depth: 1,
                children: Vec::new(),
                denied: true,
            }],
        );
        let lines = Renderer::new(&config(TreeStyle::Ascii)).render(&tree);
        assert_eq!(lines[1], "+-- locked/ [unreadable]");
    }

    #[test]
    fn test_blank_column_under_last_branch() {
        // A last-child directory's descendants get a blank column, not a
        // vertical glyph.
        let tree = dir(
            "root",
            0,
            vec![
                file("a.txt", 1),
                dir("last", 1, vec![file("inner.txt", 2)]),
            ],
        );
        let lines = Renderer::new(&config(TreeStyle::Ascii)).render(&tree);
        assert_eq!(
            lines,
            vec!["root/", "|-- a.txt", "+-- last/", "    +-- inner.txt"]
        );
    }
}
