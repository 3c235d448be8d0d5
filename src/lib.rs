//! doctree - ASCII/Unicode tree views of directory structures
//!
//! The pipeline is a single pass: walk the filesystem, filter entries,
//! order children, render glyph lines, optionally append statistics, and
//! write to stdout or a file.

pub mod config;
pub mod error;
pub mod filter;
pub mod output;
pub mod render;
pub mod stats;
pub mod walker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{RunConfig, SortMode, TreeStyle};
pub use error::{TreeError, exit_code};
pub use filter::{FilterPolicy, IgnoreRule, Preset, parse_ignore_file};
pub use output::{Destination, OutputSink};
pub use render::Renderer;
pub use stats::{StatsCollector, TreeStats, format_stats};
pub use walker::{Entry, TreeWalker};
