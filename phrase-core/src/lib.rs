//! Trie-based multi-word phrase detection.
//!
//! Given a fixed vocabulary of phrases, reports which of them occur in a
//! text as contiguous word sequences.
//!
//! ```
//! use phrase_core::{PhraseScanner, PhraseTrie};
//!
//! let trie = PhraseTrie::build(["quick fox", "lazy dog"]);
//! let scanner = PhraseScanner::new(&trie);
//! assert_eq!(
//!     scanner.scan("the quick fox jumps over the lazy dog."),
//!     vec!["quick fox"]
//! );
//! ```
//!
//! The trailing `"lazy dog"` above is not reported: the default walk only
//! emits a phrase when a following word ends it. See
//! [`ScanConfig::eager`](phrase_types::ScanConfig::eager).

#![warn(missing_docs)]

pub mod analyzer;
pub mod scanner;
pub mod trie;

pub use phrase_types::{PhraseMatch, ScanConfig, TokenPos};
pub use scanner::{search, PhraseScanner};
pub use trie::{PhraseTrie, TrieNode, TrieStats};
