//! Error types for doctree.

use std::path::PathBuf;

/// Top-level error type for doctree operations.
///
/// Access failures below the root are not errors: the walker records them
/// on the affected entry and keeps going.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("cannot read directory {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ignore file not found: {0}")]
    IgnoreFileNotFound(PathBuf),

    #[error("unsupported output extension: {0} (expected .txt or .md)")]
    UnsupportedExtension(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Map an error to its process exit code.
pub fn exit_code(error: &TreeError) -> i32 {
    match error {
        TreeError::PathNotFound(_) | TreeError::NotADirectory(_) => 2,
        TreeError::RootUnreadable { .. } => 3,
        TreeError::IgnoreFileNotFound(_) | TreeError::UnsupportedExtension(_) => 1,
        TreeError::Io(_) => 4,
    }
}
