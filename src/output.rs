//! Output destinations and the final write stage.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::TreeError;

/// Where rendered output goes, resolved from `--output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Text(PathBuf),
    Markdown(PathBuf),
}

impl Destination {
    /// Resolve a destination from an optional `--output` path. Unknown
    /// extensions are rejected here, before any traversal happens.
    pub fn resolve(output: Option<&Path>) -> Result<Self, TreeError> {
        let Some(path) = output else {
            return Ok(Self::Stdout);
        };
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("txt") => Ok(Self::Text(path.to_path_buf())),
            Some(ext) if ext.eq_ignore_ascii_case("md") => Ok(Self::Markdown(path.to_path_buf())),
            _ => Err(TreeError::UnsupportedExtension(path.to_path_buf())),
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }
}

/// Writes rendered lines to the resolved destination.
///
/// File content is assembled in memory and written with a single call, so
/// a write failure never leaves a truncated file behind.
pub struct OutputSink {
    destination: Destination,
    use_color: bool,
}

impl OutputSink {
    pub fn new(destination: Destination, use_color: bool) -> Self {
        Self {
            destination,
            use_color,
        }
    }

    pub fn write(&self, lines: &[String]) -> Result<(), TreeError> {
        match &self.destination {
            Destination::Stdout => self.write_stdout(lines).map_err(TreeError::Io),
            Destination::Text(path) => {
                self.write_file(path, &plain_content(lines))
            }
            Destination::Markdown(path) => {
                self.write_file(path, &fenced_content(lines))
            }
        }
    }

    fn write_stdout(&self, lines: &[String]) -> io::Result<()> {
        // ColorChoice::Auto drops the escapes when stdout is not a TTY.
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        for line in lines {
            if self.use_color {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(stdout, "{}", line)?;
                stdout.reset()?;
                writeln!(stdout)?;
            } else {
                writeln!(stdout, "{}", line)?;
            }
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), TreeError> {
        fs::write(path, content).map_err(TreeError::Io)?;
        println!("Tree saved to: {}", path.display());
        Ok(())
    }
}

fn plain_content(lines: &[String]) -> String {
    let mut content = lines.join("\n");
    content.push('\n');
    content
}

/// Wrap the lines in one fenced code block so the tree renders verbatim
/// in Markdown.
fn fenced_content(lines: &[String]) -> String {
    let mut content = String::from("```\n");
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    content.push_str("```\n");
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TempTree;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_stdout() {
        assert_eq!(Destination::resolve(None).unwrap(), Destination::Stdout);
    }

    #[test]
    fn test_resolve_txt_and_md() {
        let txt = Destination::resolve(Some(Path::new("tree.txt"))).unwrap();
        assert_eq!(txt, Destination::Text(PathBuf::from("tree.txt")));

        let md = Destination::resolve(Some(Path::new("tree.MD"))).unwrap();
        assert_eq!(md, Destination::Markdown(PathBuf::from("tree.MD")));
    }

    #[test]
    fn test_resolve_rejects_unknown_extension() {
        for bad in ["tree.json", "tree.html", "tree"] {
            let err = Destination::resolve(Some(Path::new(bad))).unwrap_err();
            assert!(matches!(err, TreeError::UnsupportedExtension(_)), "{}", bad);
        }
    }

    #[test]
    fn test_text_file_has_no_fence() {
        let tree = TempTree::new();
        let out = tree.path().join("tree.txt");
        let sink = OutputSink::new(Destination::Text(out.clone()), false);
        sink.write(&lines(&["root/", "+-- a.txt"])).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content, "root/\n+-- a.txt\n");
    }

    #[test]
    fn test_markdown_file_is_fenced() {
        let tree = TempTree::new();
        let out = tree.path().join("tree.md");
        let sink = OutputSink::new(Destination::Markdown(out.clone()), false);
        sink.write(&lines(&["root/", "+-- a.txt"])).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(content, "```\nroot/\n+-- a.txt\n```\n");
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let tree = TempTree::new();
        let out = tree.path().join("missing-dir").join("tree.txt");
        let sink = OutputSink::new(Destination::Text(out), false);
        let err = sink.write(&lines(&["root/"])).unwrap_err();
        assert!(matches!(err, TreeError::Io(_)));
    }
}
