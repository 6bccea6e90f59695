//! # vocab-filter
//!
//! Vocabulary-coverage filtering for noisy text.
//!
//! ## The Problem
//!
//! Scraped and OCR'd corpora are full of spans nobody wants to train on:
//! navigation menus, base64 blobs, mangled tables, text in the wrong
//! language. Most of it has one thing in common: the words are not words.
//!
//! Given a vocabulary of known words, a span is usable when most of its
//! words are in that vocabulary. This crate walks the text once, grows a
//! chunk token by token, and closes it as soon as the share of
//! out-of-vocabulary (OOV) words gets too high.
//!
//! ```text
//! vocab: {the, results, are, shown, in, table}
//!
//! "The results are shown in Table 3. xK9#qq@@zz lorem The table"
//!  └───────────── kept ─────────────┘└── closes ──┘
//! ```
//!
//! ## Tokenization
//!
//! Text is split into words, digit runs and single delimiter characters.
//! Letters and digits glued together come apart (`"abc123"` is two tokens),
//! and each delimiter is a token of its own. See [`tokenize`].
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashSet;
//! use vocab_filter::{filter_vocab, tokenize, FilteringInfo, VocabFilter};
//!
//! assert_eq!(tokenize("hello, world!"), vec!["hello", ",", " ", "world", "!"]);
//!
//! let vocab: HashSet<&str> = ["the", "cat", "sat"].into_iter().collect();
//!
//! // Plain function: (text, info) pairs
//! let chunks = filter_vocab("the cat sat", &vocab, 1, 0.5, false);
//! assert_eq!(chunks, vec![("the cat sat".to_string(), FilteringInfo::new(3, 0))]);
//!
//! // Validated configuration: chunks with byte spans
//! let filter = VocabFilter::new(1, 0.2).unwrap().sentence_start_only(true);
//! let chunks = filter.filter("The cat sat. zzz", &vocab);
//! assert_eq!(chunks[0].text, "The cat sat.");
//! ```
//!
//! ## Parameters
//!
//! | Parameter | Meaning |
//! |-----------|---------|
//! | `min_words` | A chunk is emitted only with strictly more words than this; also floors the OOV ratio denominator |
//! | `p_max_oov` | Highest tolerated `oov / max(words, min_words)` |
//! | `from_sentence_start_only` | Chunks may only begin at the text start or after `.` `?` `!` or a newline |
//!
//! ## Performance
//!
//! One linear pass, no backtracking. Tokenization borrows from the input;
//! only accepted chunk text is copied. Every call is independent, so
//! independent documents can be filtered on separate threads without
//! coordination.

mod delimiter;
mod error;
mod filter;
mod info;
mod tokenize;
mod vocabulary;

pub use delimiter::{
    is_delimiter, is_delimiter_char, is_end_of_sentence, is_integer, DELIMITERS, END_OF_SENTENCE,
};
pub use error::{Error, Result};
pub use filter::{filter_vocab, VocabFilter};
pub use info::{Chunk, FilteringInfo};
pub use tokenize::{token_indices, tokenize, tokens, TokenIndices};
pub use vocabulary::Vocabulary;
