//! Ignore rules, preset bundles, and the combined filter policy.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use glob::Pattern;
use log::debug;

use crate::error::TreeError;

/// One compiled exclusion pattern with gitignore-like semantics: a trailing
/// `/` restricts the rule to directories, `*` and `?` are glob wildcards,
/// anything else matches the base name exactly.
#[derive(Debug, Clone)]
pub struct IgnoreRule {
    text: String,
    pattern: Option<Pattern>,
    directory_only: bool,
    source_order: usize,
}

impl IgnoreRule {
    pub fn new(source: &str, source_order: usize) -> Self {
        let (text, directory_only) = match source.strip_suffix('/') {
            Some(stripped) => (stripped, true),
            None => (source, false),
        };
        // A source that is not a valid glob degrades to a literal name match.
        let pattern = match Pattern::new(text) {
            Ok(p) => Some(p),
            Err(e) => {
                debug!("rule {}: '{}' is not a valid glob ({}), matching literally", source_order, text, e);
                None
            }
        };
        Self {
            text: text.to_string(),
            pattern,
            directory_only,
            source_order,
        }
    }

    /// Check the rule against an entry's base name and kind.
    pub fn matches(&self, name: &str, is_dir: bool) -> bool {
        if self.directory_only && !is_dir {
            return false;
        }
        if name == self.text {
            return true;
        }
        self.pattern.as_ref().is_some_and(|p| p.matches(name))
    }

    /// Position of the rule in its source, kept for diagnostics.
    pub fn source_order(&self) -> usize {
        self.source_order
    }
}

/// A named bundle of ignore patterns for a common ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Python,
    Node,
    Git,
    Ide,
    All,
}

const PYTHON_PATTERNS: &[&str] = &[
    "__pycache__", "*.pyc", "*.pyo", "*.pyd", ".Python",
    "*.so", ".venv", "venv", "ENV", "env",
    "*.egg-info", "*.egg", "dist", "build",
    ".pytest_cache", ".mypy_cache", ".tox",
    "*.py[cod]", ".coverage", "htmlcov",
];

const NODE_PATTERNS: &[&str] = &[
    "node_modules", "npm-debug.log*", "yarn-debug.log*",
    "yarn-error.log*", ".npm", ".yarn", "dist",
    "build", ".next", ".nuxt", "coverage",
];

const GIT_PATTERNS: &[&str] = &[
    ".git", ".gitignore", ".gitattributes", ".gitmodules",
];

const IDE_PATTERNS: &[&str] = &[
    ".idea", ".vscode", "*.swp", "*.swo", "*~",
    ".project", ".settings", ".classpath",
    "*.sublime-*", ".atom",
];

impl Preset {
    /// Source patterns for the bundle. `all` is the union of every bundle
    /// with duplicates collapsed; matching is a union anyway, so the
    /// dedup only keeps diagnostics tidy.
    pub fn patterns(self) -> Vec<&'static str> {
        match self {
            Preset::Python => PYTHON_PATTERNS.to_vec(),
            Preset::Node => NODE_PATTERNS.to_vec(),
            Preset::Git => GIT_PATTERNS.to_vec(),
            Preset::Ide => IDE_PATTERNS.to_vec(),
            Preset::All => {
                let mut combined: Vec<&'static str> = PYTHON_PATTERNS
                    .iter()
                    .chain(NODE_PATTERNS)
                    .chain(GIT_PATTERNS)
                    .chain(IDE_PATTERNS)
                    .copied()
                    .collect();
                combined.sort_unstable();
                combined.dedup();
                combined
            }
        }
    }
}

/// Parse an ignore file into rules. Blank lines and `#` comments are
/// skipped. A missing file is a configuration error.
pub fn parse_ignore_file(path: &Path, first_order: usize) -> Result<Vec<IgnoreRule>, TreeError> {
    if !path.exists() {
        return Err(TreeError::IgnoreFileNotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path)?;
    Ok(parse_ignore_lines(&contents, first_order))
}

fn parse_ignore_lines(contents: &str, first_order: usize) -> Vec<IgnoreRule> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .enumerate()
        .map(|(i, line)| IgnoreRule::new(line, first_order + i))
        .collect()
}

/// The combined visibility decision for one entry.
///
/// Exclusion sources are unioned: any matching rule, the hidden-name
/// check, or the kind filter excludes the entry. The decision depends only
/// on (name, kind, config), never on depth or siblings.
#[derive(Debug, Default)]
pub struct FilterPolicy {
    rules: Vec<IgnoreRule>,
    ignore_hidden: bool,
    dirs_only: bool,
    files_only: bool,
}

impl FilterPolicy {
    pub fn new(rules: Vec<IgnoreRule>, ignore_hidden: bool, dirs_only: bool, files_only: bool) -> Self {
        Self {
            rules,
            ignore_hidden,
            dirs_only,
            files_only,
        }
    }

    pub fn is_visible(&self, name: &str, is_dir: bool) -> bool {
        if self.ignore_hidden && name.starts_with('.') {
            return false;
        }
        if self.dirs_only && !is_dir {
            return false;
        }
        if self.files_only && is_dir {
            return false;
        }
        for rule in &self.rules {
            if rule.matches(name, is_dir) {
                debug!("excluding '{}' (rule {})", name, rule.source_order());
                return false;
            }
        }
        true
    }
}
