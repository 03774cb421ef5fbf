//! Streaming phrase scanner.
//!
//! Walks the words of a text once, left to right, against a [`PhraseTrie`].
//! There is no backtracking and no lookahead: each token either extends the
//! current candidate or ends it. Matches never overlap.
//!
//! With the default [`ScanConfig`] two quirks of the classic walk hold:
//! - a phrase completing on the very last token is not reported, since
//!   emission only happens when a following token breaks the streak;
//! - the token that breaks a streak is dropped rather than tried as the
//!   first word of a new phrase.
//!
//! [`ScanConfig::eager`] turns both off.

mod walk;

use crate::analyzer::WordTokenizer;
use crate::trie::PhraseTrie;
use phrase_types::{PhraseMatch, ScanConfig, TokenPos};
use walk::Walk;

/// Finds vocabulary phrases in `text` using the default configuration.
///
/// Builds a throwaway trie; prefer [`PhraseScanner`] when scanning several
/// texts against the same vocabulary.
///
/// # Example
///
/// ```
/// use phrase_core::search;
///
/// let found = search("the quick fox jumps", ["quick fox"]);
/// assert_eq!(found, vec!["quick fox"]);
/// ```
pub fn search<I, S>(text: &str, phrases: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let trie = PhraseTrie::build(phrases);
    PhraseScanner::new(&trie).scan(text)
}

/// Scans texts against a borrowed trie.
///
/// Holds no state between scans; each call starts from the root.
#[derive(Debug, Clone, Copy)]
pub struct PhraseScanner<'t> {
    trie: &'t PhraseTrie,
    config: ScanConfig,
}

impl<'t> PhraseScanner<'t> {
    /// Creates a scanner with the default configuration.
    #[inline]
    pub fn new(trie: &'t PhraseTrie) -> Self {
        Self::with_config(trie, ScanConfig::default())
    }

    /// Creates a scanner with a custom configuration.
    #[inline]
    pub fn with_config(trie: &'t PhraseTrie, config: ScanConfig) -> Self {
        Self { trie, config }
    }

    /// The configuration in use.
    #[inline(always)]
    pub fn config(&self) -> ScanConfig {
        self.config
    }

    /// Returns the phrases found in `text`, in completion order.
    ///
    /// Each phrase is its words joined by a single space. A phrase found at
    /// several positions is reported once per position.
    pub fn scan(&self, text: &str) -> Vec<String> {
        self.scan_matches(text)
            .into_iter()
            .map(|m| m.phrase)
            .collect()
    }

    /// Same as [`scan`](Self::scan) over an already tokenized text.
    pub fn scan_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        self.walk_tokens(tokens, TokenPos::MAX)
            .into_iter()
            .map(|m| m.phrase)
            .collect()
    }

    /// Returns the matches found in `text` with their token positions.
    pub fn scan_matches(&self, text: &str) -> Vec<PhraseMatch> {
        let mut walk = Walk::new(self.trie.root(), self.config);
        WordTokenizer::new().tokenize(text, |token, pos| walk.step(token, pos));
        walk.finish()
    }

    /// Walks `tokens` up to and including position `last`.
    fn walk_tokens<S: AsRef<str>>(&self, tokens: &[S], last: TokenPos) -> Vec<PhraseMatch> {
        let mut walk = Walk::new(self.trie.root(), self.config);
        for (token, pos) in tokens.iter().zip(0..=last) {
            walk.step(token.as_ref(), pos);
        }
        walk.finish()
    }
}
