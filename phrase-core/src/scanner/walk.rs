//! Cursor walk over the trie.

use crate::trie::TrieNode;
use phrase_types::{PhraseMatch, ScanConfig, TokenPos};
use smallvec::SmallVec;

/// Per-scan matching state.
///
/// The cursor is either at the root or on the node reached by `pending`.
/// A token that has no child under the cursor ends the current attempt:
/// `pending` is emitted if the cursor sits on a leaf, then the cursor
/// returns to the root.
pub(crate) struct Walk<'t, 'a> {
    root: &'t TrieNode,
    cursor: &'t TrieNode,
    pending: SmallVec<[&'a str; 8]>,
    start: TokenPos,
    tokens_seen: u64,
    config: ScanConfig,
    results: Vec<PhraseMatch>,
}

impl<'t, 'a> Walk<'t, 'a> {
    pub(crate) fn new(root: &'t TrieNode, config: ScanConfig) -> Self {
        Self {
            root,
            cursor: root,
            pending: SmallVec::new(),
            start: 0,
            tokens_seen: 0,
            config,
            results: Vec::new(),
        }
    }

    /// Feeds the next token of the text.
    #[inline]
    pub(crate) fn step(&mut self, token: &'a str, pos: TokenPos) {
        self.tokens_seen += 1;

        if let Some(child) = self.cursor.child(token) {
            self.advance(child, token, pos);
            return;
        }

        self.flush();
        self.reset();

        if self.config.retry_mismatch {
            if let Some(child) = self.root.child(token) {
                self.advance(child, token, pos);
            }
        }
    }

    /// Ends the scan and returns the matches in completion order.
    pub(crate) fn finish(mut self) -> Vec<PhraseMatch> {
        if self.config.flush_at_end {
            self.flush();
        }

        tracing::debug!(
            tokens = self.tokens_seen,
            matches = self.results.len(),
            "phrase scan finished"
        );
        self.results
    }

    #[inline(always)]
    fn advance(&mut self, child: &'t TrieNode, token: &'a str, pos: TokenPos) {
        if self.pending.is_empty() {
            self.start = pos;
        }
        self.pending.push(token);
        self.cursor = child;
    }

    fn flush(&mut self) {
        if !self.cursor.is_leaf() || self.pending.is_empty() {
            return;
        }

        let found = PhraseMatch::new(
            self.pending.join(" "),
            self.start,
            self.pending.len() as u32,
        );
        tracing::trace!(phrase = %found.phrase, start = found.start, "phrase matched");
        self.results.push(found);
    }

    #[inline(always)]
    fn reset(&mut self) {
        self.cursor = self.root;
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PhraseTrie;

    fn walk_all(trie: &PhraseTrie, config: ScanConfig, tokens: &[&str]) -> Vec<PhraseMatch> {
        let mut walk = Walk::new(trie.root(), config);
        for (i, token) in tokens.iter().enumerate() {
            walk.step(token, i as TokenPos);
        }
        walk.finish()
    }

    #[test]
    fn cursor_follows_matching_tokens() {
        let trie = PhraseTrie::build(["a b c"]);
        let mut walk = Walk::new(trie.root(), ScanConfig::default());

        walk.step("a", 0);
        walk.step("b", 1);
        assert_eq!(walk.cursor.token(), Some("b"));
        assert_eq!(walk.pending.as_slice(), &["a", "b"]);

        walk.step("x", 2);
        assert!(walk.cursor.is_root());
        assert!(walk.pending.is_empty());
    }

    #[test]
    fn leaf_flushes_on_next_token() {
        let trie = PhraseTrie::build(["a b"]);
        let found = walk_all(&trie, ScanConfig::default(), &["a", "b", "z"]);
        assert_eq!(found, vec![PhraseMatch::new("a b".to_string(), 0, 2)]);
    }

    #[test]
    fn partial_match_is_discarded() {
        let trie = PhraseTrie::build(["a b c"]);
        let found = walk_all(&trie, ScanConfig::eager(), &["a", "b", "z"]);
        assert!(found.is_empty());
    }

    #[test]
    fn start_tracks_first_pending_token() {
        let trie = PhraseTrie::build(["b c"]);
        let found = walk_all(&trie, ScanConfig::default(), &["x", "y", "b", "c", "z"]);
        assert_eq!(found, vec![PhraseMatch::new("b c".to_string(), 2, 2)]);
        assert_eq!(found[0].end(), 4);
    }

    #[test]
    fn retry_starts_new_match_on_breaking_token() {
        let trie = PhraseTrie::build(["a b", "c d"]);
        let tokens = ["a", "c", "d", "z"];

        assert!(walk_all(&trie, ScanConfig::compatible(), &tokens).is_empty());

        let retry = ScanConfig {
            retry_mismatch: true,
            ..ScanConfig::default()
        };
        let found = walk_all(&trie, retry, &tokens);
        assert_eq!(found, vec![PhraseMatch::new("c d".to_string(), 1, 2)]);
    }
}
