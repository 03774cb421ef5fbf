//! Prefix tree over tokenized phrases.
//!
//! Built once from a vocabulary and read-only afterwards. Phrases that share
//! leading words share the corresponding path, so the scanner can follow a
//! single cursor through the tree one token at a time.
//!
//! Completion is structural: a phrase ends where a node has no children.
//! A vocabulary containing both `"fox"` and `"fox trot"` therefore never
//! recognizes `"fox"` on its own.
//!
//! Threading:
//! - [`PhraseTrie`] has no interior mutability and is `Send + Sync`, so one
//!   trie can back any number of concurrent scans.

mod builder;
mod node;
mod stats;

pub use node::TrieNode;
pub use stats::TrieStats;

use crate::analyzer::WordTokenizer;

/// A phrase vocabulary organized as a prefix tree of words.
#[derive(Debug, Clone)]
pub struct PhraseTrie {
    pub(crate) root: TrieNode,
    /// Non-empty phrases fed to the builder, duplicates included.
    pub(crate) phrases: usize,
}

impl Default for PhraseTrie {
    fn default() -> Self {
        Self::build(core::iter::empty::<&str>())
    }
}

impl PhraseTrie {
    /// The root node. It carries no token.
    #[inline(always)]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Returns `true` if no phrase was inserted.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Follows `tokens` from the root and returns the node reached.
    ///
    /// Returns `None` as soon as a token has no matching child.
    #[inline]
    pub fn lookup<S: AsRef<str>>(&self, tokens: &[S]) -> Option<&TrieNode> {
        self.root.descend(tokens)
    }

    /// Tokenizes `phrase` and looks up the resulting word sequence.
    pub fn lookup_phrase(&self, phrase: &str) -> Option<&TrieNode> {
        let tokens = WordTokenizer::new().tokens(phrase);
        self.lookup(&tokens[..])
    }
}
