//! Vocabulary-coverage chunk filtering.
//!
//! ## How It Works
//!
//! Tokens are accumulated into a growing chunk. Each word token is checked
//! against the vocabulary; lone delimiters and pure digit runs always pass.
//! An unknown word is tolerated as long as the chunk's OOV ratio stays within
//! the threshold:
//!
//! ```text
//! ratio = oov_count / max(word_count, min_words)
//! ```
//!
//! The `min_words` floor stops one typo from sinking a short chunk. When an
//! unknown word pushes the ratio over the limit, the chunk closes: it is
//! emitted if it has more than `min_words` words, dropped otherwise, and the
//! offending word goes with neither.
//!
//! ```text
//! vocab = {the, cat, sat, on, mat}   min_words = 1   p_max_oov = 0.2
//!
//! "the cat sat on the xqzv glorp mat"
//!                       ^^^^ 1/6 = 0.17  kept
//!                            ^^^^^ 2/7 = 0.29  chunk closes
//!
//! emitted: "the cat sat on the xqzv"  (word_count=7, oov_count=2)
//! ```
//!
//! Note that the closing word is counted in `word_count` and `oov_count`
//! but its text is not part of the emitted chunk.
//!
//! ## Sentence Starts
//!
//! With `from_sentence_start_only`, a new chunk may only begin at the start
//! of the text or right after an end-of-sentence token (`.` `?` `!` or a
//! newline). Everything in between is skipped without being counted.
//!
//! ## Trade-offs
//!
//! | p_max_oov | Effect |
//! |-----------|--------|
//! | 0.0 | Any unknown word closes the chunk |
//! | 0.1-0.3 | Tolerates names, typos, rare words |
//! | 1.0 | Never closes on OOV; one chunk per text |

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::delimiter::{is_delimiter, is_end_of_sentence, is_integer};
use crate::tokenize::token_indices;
use crate::{Chunk, Error, FilteringInfo, Result, Vocabulary};

/// Configured vocabulary filter.
///
/// ## Example
///
/// ```rust
/// use std::collections::HashSet;
/// use vocab_filter::VocabFilter;
///
/// let vocab: HashSet<&str> = ["the", "cat", "sat"].into_iter().collect();
/// let filter = VocabFilter::new(1, 0.5).unwrap();
///
/// let chunks = filter.filter("the cat sat", &vocab);
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].text, "the cat sat");
/// assert_eq!(chunks[0].info.word_count, 3);
/// assert_eq!(chunks[0].info.oov_count, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawVocabFilter"))]
pub struct VocabFilter {
    min_words: usize,
    p_max_oov: f32,
    from_sentence_start_only: bool,
}

impl VocabFilter {
    /// Create a new filter.
    ///
    /// # Arguments
    ///
    /// * `min_words` - A chunk needs strictly more words than this to be emitted
    /// * `p_max_oov` - Highest tolerated OOV ratio, in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOovRatio`] if `p_max_oov` is NaN or outside `[0, 1]`.
    pub fn new(min_words: usize, p_max_oov: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&p_max_oov) {
            return Err(Error::InvalidOovRatio(p_max_oov));
        }
        Ok(Self::unchecked(min_words, p_max_oov))
    }

    const fn unchecked(min_words: usize, p_max_oov: f32) -> Self {
        Self {
            min_words,
            p_max_oov,
            from_sentence_start_only: false,
        }
    }

    /// Only start chunks at the beginning of a sentence.
    #[must_use]
    pub const fn sentence_start_only(mut self, enabled: bool) -> Self {
        self.from_sentence_start_only = enabled;
        self
    }

    /// The minimum word count a chunk must exceed.
    #[must_use]
    pub const fn min_words(&self) -> usize {
        self.min_words
    }

    /// The OOV ratio threshold.
    #[must_use]
    pub const fn p_max_oov(&self) -> f32 {
        self.p_max_oov
    }

    /// Whether chunks may only start at sentence boundaries.
    #[must_use]
    pub const fn is_sentence_start_only(&self) -> bool {
        self.from_sentence_start_only
    }

    /// Split `text` into chunks that pass the vocabulary filter.
    ///
    /// Chunks come back in input order.
    pub fn filter<V: Vocabulary + ?Sized>(&self, text: &str, vocab: &V) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut current = Accumulator::default();
        let mut start_of_sentence = true;
        let mut token_count = 0usize;

        for (offset, token) in token_indices(text) {
            token_count += 1;

            if self.from_sentence_start_only && current.is_empty() && !start_of_sentence {
                start_of_sentence = is_end_of_sentence(token);
                continue;
            }

            // Leaves start_of_sentence untouched.
            if current.is_empty() && matches!(token, " " | "\n") {
                continue;
            }

            let delimiter = is_delimiter(token);
            if !delimiter {
                current.word_count += 1;
            }

            if delimiter || is_integer(token) || vocab.contains_word(&ascii_lowercase(token)) {
                current.push(offset, token);
            } else {
                current.oov_count += 1;
                if self.oov_ratio(&current) <= self.p_max_oov {
                    current.push(offset, token);
                } else {
                    let info = current.info();
                    let emitted = current.close(offset, self.min_words);
                    trace!(
                        word_count = info.word_count,
                        oov_count = info.oov_count,
                        emitted = emitted.is_some(),
                        "chunk closed on oov ratio"
                    );
                    chunks.extend(emitted);
                }
            }

            start_of_sentence = is_end_of_sentence(token);
        }

        if !current.is_empty() {
            chunks.extend(current.close(text.len(), self.min_words));
        }

        debug!(
            tokens = token_count,
            chunks = chunks.len(),
            "vocabulary filtering complete"
        );
        chunks
    }

    fn oov_ratio(&self, current: &Accumulator) -> f32 {
        current.oov_count as f32 / current.word_count.max(self.min_words) as f32
    }
}

/// Unvalidated field mirror; deserialization goes through [`VocabFilter::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawVocabFilter {
    min_words: usize,
    p_max_oov: f32,
    #[serde(default)]
    from_sentence_start_only: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawVocabFilter> for VocabFilter {
    type Error = Error;

    fn try_from(raw: RawVocabFilter) -> Result<Self> {
        Self::new(raw.min_words, raw.p_max_oov)
            .map(|filter| filter.sentence_start_only(raw.from_sentence_start_only))
    }
}

/// Filter `text` against `vocab`, returning `(chunk_text, info)` pairs.
///
/// Unlike [`VocabFilter::new`], this does not validate `p_max_oov`. A
/// threshold below zero closes a chunk on every unknown word regardless of
/// `min_words`; one above one never does. A NaN threshold compares false
/// against every ratio, so it behaves like a negative one.
///
/// ```rust
/// use std::collections::HashSet;
/// use vocab_filter::{filter_vocab, FilteringInfo};
///
/// let vocab: HashSet<&str> = ["the", "cat", "sat"].into_iter().collect();
/// let chunks = filter_vocab("the cat sat", &vocab, 1, 0.5, false);
///
/// assert_eq!(chunks, vec![("the cat sat".to_string(), FilteringInfo::new(3, 0))]);
/// ```
pub fn filter_vocab<V: Vocabulary + ?Sized>(
    text: &str,
    vocab: &V,
    min_words: usize,
    p_max_oov: f32,
    from_sentence_start_only: bool,
) -> Vec<(String, FilteringInfo)> {
    VocabFilter::unchecked(min_words, p_max_oov)
        .sentence_start_only(from_sentence_start_only)
        .filter(text, vocab)
        .into_iter()
        .map(Chunk::into_pair)
        .collect()
}

fn ascii_lowercase(token: &str) -> Cow<'_, str> {
    if token.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(token.to_ascii_lowercase())
    } else {
        Cow::Borrowed(token)
    }
}

/// The chunk under construction.
#[derive(Debug, Default)]
struct Accumulator {
    text: String,
    start: usize,
    word_count: usize,
    oov_count: usize,
}

impl Accumulator {
    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn push(&mut self, offset: usize, token: &str) {
        if self.text.is_empty() {
            self.start = offset;
        }
        self.text.push_str(token);
    }

    fn info(&self) -> FilteringInfo {
        FilteringInfo::new(self.word_count, self.oov_count)
    }

    /// Trim trailing spaces and newlines, then hand the chunk out if it has
    /// more than `min_words` words. Always leaves `self` empty.
    ///
    /// A chunk closed before any text was pushed is emitted empty at
    /// `position` when its word count still qualifies.
    fn close(&mut self, position: usize, min_words: usize) -> Option<Chunk> {
        let finished = std::mem::take(self);
        if finished.word_count <= min_words {
            return None;
        }
        let start = if finished.text.is_empty() {
            position
        } else {
            finished.start
        };

        let info = finished.info();
        let mut text = finished.text;
        let trimmed = text.trim_end_matches([' ', '\n']).len();
        text.truncate(trimmed);

        let end = start + text.len();
        Some(Chunk::new(text, start, end, info))
    }
}
