//! Run configuration shared across the pipeline.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::filter::FilterPolicy;
use crate::output::Destination;

/// Tree drawing style. The set is closed by design: each style maps to a
/// fixed glyph table in the renderer, not an extensible registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TreeStyle {
    /// Plain ASCII connectors (`|--`, `+--`)
    #[default]
    Ascii,
    /// Box-drawing connectors (`├──`, `└──`)
    Unicode,
    /// Heavy box-drawing connectors (`┣━━`, `┗━━`)
    Bold,
    /// Reduced ASCII set with a backtick last-branch
    Minimal,
}

/// How children of a directory are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Directories before files, each group sorted by name.
    #[default]
    DirsFirst,
    /// All entries together, sorted by name.
    Alphabetic,
}

/// The resolved options for one invocation.
///
/// Built once from CLI input, immutable thereafter, and passed explicitly
/// into the walker and renderer. No ambient state.
#[derive(Debug)]
pub struct RunConfig {
    pub root: PathBuf,
    pub max_depth: Option<usize>,
    pub sort: SortMode,
    pub style: TreeStyle,
    pub show_stats: bool,
    pub use_color: bool,
    pub destination: Destination,
    pub filter: FilterPolicy,
}
