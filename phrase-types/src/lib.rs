//! Core types shared by the phrase scanner crates.
//!
//! Kept separate from `phrase-core` so that callers wrapping the scanner
//! (CLIs, services) can depend on the result and configuration types
//! without pulling in the trie itself.

#![warn(missing_docs)]

use core::fmt;

/// Position of a token within a tokenized text.
///
/// Positions count words, not bytes, and start at 0.
pub type TokenPos = u32;

/// A phrase found during a scan, with where it was found.
///
/// Matches are reported in the order they complete during the left-to-right
/// walk. Two matches of the same phrase at different positions are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhraseMatch {
    /// Matched words joined by a single space.
    pub phrase: String,
    /// Position of the first matched token.
    pub start: TokenPos,
    /// Number of tokens in the match.
    pub len: u32,
}

impl PhraseMatch {
    /// Creates a new match.
    #[inline]
    pub fn new(phrase: String, start: TokenPos, len: u32) -> Self {
        Self { phrase, start, len }
    }

    /// Position one past the last matched token.
    ///
    /// Saturates at `TokenPos::MAX` for a match ending on the last
    /// representable position.
    #[inline(always)]
    pub const fn end(&self) -> TokenPos {
        self.start.saturating_add(self.len)
    }
}

impl fmt::Display for PhraseMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @{}..{}", self.phrase, self.start, self.end())
    }
}

/// Scan behavior options.
///
/// The default reproduces the classic streaming walk exactly: a phrase that
/// completes on the last token of the text is not reported, and a token that
/// breaks a partial match is dropped instead of starting a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanConfig {
    /// Emit a completed phrase that coincides with the end of the text.
    pub flush_at_end: bool,
    /// Re-try the token that broke a partial match against the root before
    /// moving on.
    pub retry_mismatch: bool,
}

impl ScanConfig {
    /// Classic walk: no trailing flush, mismatching token dropped.
    pub const fn compatible() -> Self {
        Self {
            flush_at_end: false,
            retry_mismatch: false,
        }
    }

    /// Reports trailing matches and lets a mismatching token start a new one.
    pub const fn eager() -> Self {
        Self {
            flush_at_end: true,
            retry_mismatch: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_compatible() {
        assert_eq!(ScanConfig::default(), ScanConfig::compatible());
        assert!(!ScanConfig::default().flush_at_end);
        assert!(!ScanConfig::default().retry_mismatch);
    }

    #[test]
    fn eager_enables_both() {
        let config = ScanConfig::eager();
        assert!(config.flush_at_end);
        assert!(config.retry_mismatch);
    }

    #[test]
    fn match_end_and_display() {
        let m = PhraseMatch::new("quick fox".to_string(), 1, 2);
        assert_eq!(m.end(), 3);
        assert_eq!(m.to_string(), "quick fox @1..3");
    }

    #[test]
    fn match_end_saturates() {
        let m = PhraseMatch::new("x".to_string(), TokenPos::MAX, 1);
        assert_eq!(m.end(), TokenPos::MAX);

        let m = PhraseMatch::new("x y".to_string(), TokenPos::MAX - 1, 2);
        assert_eq!(m.end(), TokenPos::MAX);
    }
}
