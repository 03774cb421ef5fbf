//! Streaming Word Tokenizer
//!
//! Splits raw text into words for both vocabulary building and scanning.
//! The trie and the scanner must agree on what a word is, so both go
//! through this one module.
//!
//! ## What It Does
//!
//! Given input like `"the quick, brown fox!"`, it emits each word with its
//! position in the text:
//!
//! ```ignore
//! ("the", 0)
//! ("quick", 1)
//! ("brown", 2)
//! ("fox", 3)
//! ```
//!
//! ## Word Characters
//!
//! A token is a maximal run of ASCII letters, ASCII digits and `_`.
//! Everything else is a separator and never appears in a token, including
//! punctuation, whitespace and every non-ASCII byte. Case is preserved:
//! `"Fox"` and `"fox"` are different tokens.
//!
//! Because tokens only ever contain ASCII bytes, every token boundary is
//! also a `char` boundary, so tokens are plain slices of the input.
//!
//! ## Usage
//!
//! ```rust
//! use phrase_core::analyzer::tokenizer::WordTokenizer;
//!
//! let mut words = Vec::new();
//! WordTokenizer::new().tokenize("hello, world", |text, pos| {
//!     words.push((text, pos));
//! });
//! assert_eq!(words, vec![("hello", 0), ("world", 1)]);
//! ```

use phrase_types::TokenPos;

#[inline(always)]
const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Streaming tokenizer - splits text into word tokens.
///
/// Zero allocation: tokens are emitted through a callback as slices of the
/// original input.
#[derive(Debug, Copy, Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes `text` and emits `(token, position)`.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop.
    #[inline(always)]
    pub fn tokenize<'t, F>(&self, text: &'t str, emit: F)
    where
        F: FnMut(&'t str, TokenPos),
    {
        self.tokenize_up_to(text, TokenPos::MAX, emit);
    }

    /// Emits tokens up to and including position `last`.
    #[inline(always)]
    fn tokenize_up_to<'t, F>(&self, text: &'t str, last: TokenPos, mut emit: F)
    where
        F: FnMut(&'t str, TokenPos),
    {
        let bytes = text.as_bytes();
        let mut start: Option<usize> = None;
        let mut pos: TokenPos = 0;

        for (i, &b) in bytes.iter().enumerate() {
            match (is_word_byte(b), start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    emit(&text[s..i], pos);
                    if pos == last {
                        return;
                    }
                    pos += 1;
                    start = None;
                }
                _ => {}
            }
        }

        if let Some(s) = start {
            emit(&text[s..], pos);
        }
    }

    /// Collects all tokens of `text` in order.
    pub fn tokens<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut out = Vec::new();
        self.tokenize(text, |token, _| out.push(token));
        out
    }
}
