//! Depth-first directory traversal producing the in-memory entry tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{RunConfig, SortMode};
use crate::error::TreeError;

/// One filesystem object in the materialized tree. Root is depth 0.
///
/// A depth-pruned directory and a genuinely empty one both carry no
/// children; the renderer treats them identically. `denied` marks a
/// directory whose listing failed mid-walk.
#[derive(Debug, Clone)]
pub enum Entry {
    File {
        name: String,
        depth: usize,
    },
    Dir {
        name: String,
        depth: usize,
        children: Vec<Entry>,
        denied: bool,
    },
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::File { name, .. } | Entry::Dir { name, .. } => name,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Entry::File { depth, .. } | Entry::Dir { depth, .. } => *depth,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Entry::Dir { .. })
    }
}

/// A directory child picked up during listing, before descent.
struct Candidate {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Tree walker that materializes the full visible tree before rendering.
///
/// Symlinks are classified by their target type; cycle detection is a
/// documented non-goal.
pub struct TreeWalker<'a> {
    config: &'a RunConfig,
}

impl<'a> TreeWalker<'a> {
    pub fn new(config: &'a RunConfig) -> Self {
        Self { config }
    }

    /// Walk from the configured root.
    ///
    /// A missing or non-directory root and an unreadable root listing are
    /// fatal. Deeper listing failures mark the affected directory as
    /// `denied` and the walk continues. Exclusion rules never apply to the
    /// root itself.
    pub fn walk(&self) -> Result<Entry, TreeError> {
        let root = &self.config.root;
        if !root.exists() {
            return Err(TreeError::PathNotFound(root.clone()));
        }
        if !root.is_dir() {
            return Err(TreeError::NotADirectory(root.clone()));
        }

        let resolved = root.canonicalize().unwrap_or_else(|_| root.clone());
        let name = resolved
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| resolved.display().to_string());

        if self.at_max_depth(0) {
            return Ok(Entry::Dir {
                name,
                depth: 0,
                children: Vec::new(),
                denied: false,
            });
        }

        let children = self
            .read_children(&resolved, 0)
            .map_err(|source| TreeError::RootUnreadable {
                path: root.clone(),
                source,
            })?;

        Ok(Entry::Dir {
            name,
            depth: 0,
            children,
            denied: false,
        })
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.config.max_depth.is_some_and(|max| depth >= max)
    }

    fn walk_dir(&self, path: &Path, name: String, depth: usize) -> Entry {
        // A directory at the depth cutoff is listed by its parent but
        // never read, so the limit also bounds I/O.
        if self.at_max_depth(depth) {
            return Entry::Dir {
                name,
                depth,
                children: Vec::new(),
                denied: false,
            };
        }

        match self.read_children(path, depth) {
            Ok(children) => Entry::Dir {
                name,
                depth,
                children,
                denied: false,
            },
            Err(e) => {
                debug!("cannot read {}: {}", path.display(), e);
                Entry::Dir {
                    name,
                    depth,
                    children: Vec::new(),
                    denied: true,
                }
            }
        }
    }

    /// List, filter, and sort one directory, then descend into the visible
    /// subdirectories. Excluded directories are pruned here, before any
    /// read of their contents.
    fn read_children(&self, path: &Path, depth: usize) -> io::Result<Vec<Entry>> {
        let mut candidates: Vec<Candidate> = fs::read_dir(path)?
            .filter_map(|e| e.ok())
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                let entry_path = entry.path();
                let is_dir = entry_path.is_dir();
                self.config
                    .filter
                    .is_visible(&name, is_dir)
                    .then_some(Candidate {
                        name,
                        path: entry_path,
                        is_dir,
                    })
            })
            .collect();

        match self.config.sort {
            SortMode::Alphabetic => candidates.sort_by(|a, b| a.name.cmp(&b.name)),
            SortMode::DirsFirst => candidates.sort_by(|a, b| {
                b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name))
            }),
        }

        Ok(candidates
            .into_iter()
            .map(|c| {
                if c.is_dir {
                    self.walk_dir(&c.path, c.name, depth + 1)
                } else {
                    Entry::File {
                        name: c.name,
                        depth: depth + 1,
                    }
                }
            })
            .collect())
    }
}
