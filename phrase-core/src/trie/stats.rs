//! Statistics and TrieStats.

use crate::trie::node::TrieNode;
use crate::trie::PhraseTrie;

/// A snapshot of trie statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieStats {
    /// Non-empty phrases given to the builder, duplicates included.
    pub num_phrases: usize,
    /// Nodes below the root.
    pub num_nodes: usize,
    /// Nodes without children, i.e. phrases that can complete.
    pub num_leaves: usize,
    /// Words on the longest root-to-leaf path.
    pub max_depth: usize,
}

impl PhraseTrie {
    /// Returns trie statistics.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats {
            num_phrases: self.phrases,
            num_nodes: 0,
            num_leaves: 0,
            max_depth: 0,
        };

        let mut stack: Vec<(&TrieNode, usize)> = self.root.children().map(|c| (c, 1)).collect();
        while let Some((node, depth)) = stack.pop() {
            stats.num_nodes += 1;
            if node.is_leaf() {
                stats.num_leaves += 1;
                stats.max_depth = stats.max_depth.max(depth);
            }
            stack.extend(node.children().map(|c| (c, depth + 1)));
        }

        stats
    }
}

impl TrieStats {
    /// Leaves per inserted phrase.
    ///
    /// Below 1.0 when some phrases are shadowed by longer ones sharing
    /// their path, or when phrases were repeated.
    pub fn completion_ratio(&self) -> f32 {
        if self.num_phrases == 0 {
            return 1.0;
        }
        self.num_leaves as f32 / self.num_phrases as f32
    }
}

impl core::fmt::Display for TrieStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} phrases, {} nodes, {} leaves, depth {}",
            self.num_phrases, self.num_nodes, self.num_leaves, self.max_depth
        )
    }
}
