//! Size statistics of a trie.

use std::fmt;

/// Snapshot of a trie's shape, as returned by [`Trie::stats`](crate::Trie::stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Stats {
    /// Number of distinct words stored
    pub words: usize,
    /// Longest root-to-node path, in edges
    pub height: usize,
    /// Number of nodes, root included
    pub nodes: usize,
}

impl From<Stats> for (usize, usize, usize) {
    fn from(stats: Stats) -> Self {
        (stats.words, stats.height, stats.nodes)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words, height {}, {} nodes",
            self.words, self.height, self.nodes
        )
    }
}
