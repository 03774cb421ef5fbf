//! Trie construction.

use crate::analyzer::WordTokenizer;
use crate::trie::node::TrieNode;
use crate::trie::PhraseTrie;
use memchr::memchr_iter;
use smallvec::SmallVec;

/// Most vocabulary phrases are a handful of words.
pub(crate) const INLINE_PHRASE_TOKENS: usize = 8;

impl PhraseTrie {
    /// Builds a trie from a list of phrases.
    ///
    /// Each phrase is tokenized into words; phrases sharing a prefix share
    /// the corresponding path. Phrases without any word are ignored and
    /// repeated phrases reuse the existing path.
    ///
    /// # Example
    ///
    /// ```
    /// use phrase_core::PhraseTrie;
    ///
    /// let trie = PhraseTrie::build(["quick fox", "quick bear"]);
    /// let quick = trie.lookup(&["quick"]).unwrap();
    /// assert_eq!(quick.child_tokens(), vec!["bear", "fox"]);
    /// ```
    pub fn build<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::empty();
        for phrase in phrases {
            trie.insert(phrase.as_ref());
        }
        trie.log_built();
        trie
    }

    /// Builds a trie from newline-separated text, one phrase per line.
    ///
    /// Blank lines contribute nothing. `\r` is not a word character, so
    /// `\r\n` line endings need no special handling.
    pub fn from_lines(text: &str) -> Self {
        let mut trie = Self::empty();
        let mut start = 0usize;

        for i in memchr_iter(b'\n', text.as_bytes()) {
            trie.insert(&text[start..i]);
            start = i + 1;
        }
        trie.insert(&text[start..]);

        trie.log_built();
        trie
    }

    fn empty() -> Self {
        Self {
            root: TrieNode::root(),
            phrases: 0,
        }
    }

    /// Inserts one phrase. Returns `false` if it had no words.
    fn insert(&mut self, phrase: &str) -> bool {
        let mut tokens: SmallVec<[&str; INLINE_PHRASE_TOKENS]> = SmallVec::new();
        WordTokenizer::new().tokenize(phrase, |token, _| tokens.push(token));

        if tokens.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        for token in tokens {
            node = node.child_or_insert(token);
        }
        self.phrases += 1;
        true
    }

    fn log_built(&self) {
        if tracing::enabled!(tracing::Level::DEBUG) {
            let stats = self.stats();
            tracing::debug!(
                phrases = stats.num_phrases,
                nodes = stats.num_nodes,
                leaves = stats.num_leaves,
                depth = stats.max_depth,
                "built phrase trie"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_empty_phrases() {
        let mut trie = PhraseTrie::empty();
        assert!(!trie.insert(""));
        assert!(!trie.insert(" ,;- "));
        assert!(trie.insert("fox"));
        assert_eq!(trie.phrases, 1);
    }

    #[test]
    fn empty_phrases_add_no_path() {
        let trie = PhraseTrie::build(["", "   ", "!!"]);
        assert!(trie.root().is_leaf());
        assert_eq!(trie.stats().num_nodes, 0);
    }

    #[test]
    fn punctuation_in_phrases_is_ignored() {
        let trie = PhraseTrie::build(["quick, fox!"]);
        assert!(trie.lookup(&["quick", "fox"]).is_some_and(|n| n.is_leaf()));
    }

    #[test]
    fn repeated_phrase_reuses_path() {
        let once = PhraseTrie::build(["quick fox"]);
        let twice = PhraseTrie::build(["quick fox", "quick fox"]);
        assert_eq!(once.stats().num_nodes, twice.stats().num_nodes);
        assert_eq!(twice.root().len(), 1);
    }

    #[test]
    fn long_phrase_spills_inline_buffer() {
        let words: Vec<String> = (0..INLINE_PHRASE_TOKENS * 2)
            .map(|i| format!("w{i}"))
            .collect();
        let trie = PhraseTrie::build([words.join(" ")]);
        assert!(trie.lookup(&words[..]).is_some_and(|n| n.is_leaf()));
        assert_eq!(trie.stats().max_depth, words.len());
    }

    #[test]
    fn from_lines_one_phrase_per_line() {
        let trie = PhraseTrie::from_lines("quick fox\r\n\nquick bear\nlazy dog");
        assert_eq!(trie.stats().num_phrases, 3);
        assert_eq!(trie.root().child_tokens(), vec!["lazy", "quick"]);
        assert!(trie.lookup_phrase("quick bear").is_some());
        assert!(trie.lookup_phrase("lazy dog").is_some_and(|n| n.is_leaf()));
    }

    #[test]
    fn from_lines_matches_build() {
        let text = "alpha beta\ngamma\nalpha delta\n";
        let a = PhraseTrie::from_lines(text);
        let b = PhraseTrie::build(text.lines());
        assert_eq!(a.stats(), b.stats());
    }
}
