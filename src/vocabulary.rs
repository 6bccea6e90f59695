//! Vocabulary lookup.
//!
//! The filter only ever asks one question of a vocabulary: is this
//! (lowercased) word in it? Any set type can answer that, so the common
//! standard collections work out of the box:
//!
//! ```rust
//! use std::collections::{BTreeSet, HashSet};
//! use vocab_filter::Vocabulary;
//!
//! let owned: HashSet<String> = ["cat".to_string()].into_iter().collect();
//! let borrowed: BTreeSet<&str> = ["cat"].into_iter().collect();
//!
//! assert!(owned.contains_word("cat"));
//! assert!(borrowed.contains_word("cat"));
//! assert!(!borrowed.contains_word("Cat")); // callers lowercase first
//! ```
//!
//! Entries are expected to be lowercase already. The filter lowercases the
//! token before asking, never the vocabulary.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// A set of known words.
pub trait Vocabulary {
    /// Whether `word` is a member. `word` is already lowercased.
    fn contains_word(&self, word: &str) -> bool;
}

impl<S: BuildHasher> Vocabulary for HashSet<String, S> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<S: BuildHasher> Vocabulary for HashSet<&str, S> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl Vocabulary for BTreeSet<String> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl Vocabulary for BTreeSet<&str> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<V: Vocabulary + ?Sized> Vocabulary for &V {
    fn contains_word(&self, word: &str) -> bool {
        (**self).contains_word(word)
    }
}
