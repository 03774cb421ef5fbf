//! Text analysis.
//!
//! Vocabulary phrases and scanned text share a single tokenizer so that
//! both sides split words identically.

pub mod tokenizer;

pub use tokenizer::WordTokenizer;
