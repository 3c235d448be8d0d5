//! Statistics over the visible entry tree.

use crate::walker::Entry;

/// Counts of visible entries. The root is the subject being described,
/// not content, so it is excluded from both counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub dirs: usize,
    pub files: usize,
    /// Deepest rendered entry depth; 0 when the root has no children.
    pub max_depth: usize,
}

/// Accumulates stats over a materialized entry tree.
#[derive(Debug, Default)]
pub struct StatsCollector {
    stats: TreeStats,
}

impl StatsCollector {
    /// Tally every visible entry beneath (but not including) the root.
    pub fn collect(root: &Entry) -> TreeStats {
        let mut collector = Self::default();
        if let Entry::Dir { children, .. } = root {
            for child in children {
                collector.record(child);
            }
        }
        collector.stats
    }

    fn record(&mut self, entry: &Entry) {
        self.stats.max_depth = self.stats.max_depth.max(entry.depth());
        match entry {
            Entry::File { .. } => self.stats.files += 1,
            Entry::Dir { children, .. } => {
                self.stats.dirs += 1;
                for child in children {
                    self.record(child);
                }
            }
        }
    }
}

/// Format the stats block appended to the output when requested.
pub fn format_stats(stats: &TreeStats) -> Vec<String> {
    let rule = "-".repeat(40);
    vec![
        String::new(),
        rule.clone(),
        format!("Directories: {}", stats.dirs),
        format!("Files:       {}", stats.files),
        format!("Max Depth:   {}", stats.max_depth),
        rule,
    ]
}
