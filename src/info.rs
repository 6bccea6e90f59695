//! Emitted chunks and the counts that describe them.

/// Composition of a chunk at the moment it was emitted.
///
/// `word_count` counts every token that is not a lone delimiter.
/// `oov_count` counts the out-of-vocabulary words among them, so
/// `oov_count <= word_count` always holds.
///
/// ```rust
/// use vocab_filter::FilteringInfo;
///
/// let info = FilteringInfo::new(4, 1);
/// assert_eq!(info.to_string(), "FilteringInfo(word_count=4, oov_count=1)");
/// assert!((info.oov_ratio() - 0.25).abs() < f32::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilteringInfo {
    /// Number of word tokens (anything but a single delimiter).
    pub word_count: usize,
    /// Number of word tokens missing from the vocabulary.
    pub oov_count: usize,
}

impl FilteringInfo {
    /// Create a new info record.
    #[must_use]
    pub const fn new(word_count: usize, oov_count: usize) -> Self {
        Self {
            word_count,
            oov_count,
        }
    }

    /// Fraction of words that were out of vocabulary, `0.0` when there are none.
    ///
    /// This is the plain ratio. The filter's threshold check floors the
    /// denominator at `min_words` instead.
    #[must_use]
    pub fn oov_ratio(&self) -> f32 {
        if self.word_count == 0 {
            0.0
        } else {
            self.oov_count as f32 / self.word_count as f32
        }
    }
}

impl std::fmt::Display for FilteringInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FilteringInfo(word_count={}, oov_count={})",
            self.word_count, self.oov_count
        )
    }
}

/// A span of text that passed the vocabulary filter.
///
/// ## Byte Offsets
///
/// A chunk is a contiguous run of input tokens with trailing spaces and
/// newlines trimmed, so `start` and `end` always slice it back out of the
/// original text:
///
/// ```rust
/// use std::collections::HashSet;
/// use vocab_filter::VocabFilter;
///
/// let vocab: HashSet<&str> = ["the", "cat", "sat"].into_iter().collect();
/// let text = "  The cat sat.\n";
///
/// let chunks = VocabFilter::new(1, 0.5).unwrap().filter(text, &vocab);
/// assert_eq!(chunks[0].text, "The cat sat.");
/// assert_eq!(&text[chunks[0].span()], chunks[0].text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    /// The chunk text, verbatim from the input.
    pub text: String,
    /// Byte offset where this chunk starts in the original text.
    pub start: usize,
    /// Byte offset where this chunk ends (exclusive) in the original text.
    pub end: usize,
    /// Word and OOV counts at emission time.
    pub info: FilteringInfo,
}

impl Chunk {
    /// Build a chunk from its kept text, input span and counts.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, info: FilteringInfo) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            info,
        }
    }

    /// Byte length of the kept text, after trailing whitespace trimming.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk is empty.
    ///
    /// The filter only emits an empty chunk when the very first word of a
    /// chunk is out of vocabulary, pushes the ratio over the threshold, and
    /// `min_words` is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Where the kept text sits in the filtered input, as a byte range.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Drop the span, keeping the `(text, info)` pair.
    #[must_use]
    pub fn into_pair(self) -> (String, FilteringInfo) {
        (self.text, self.info)
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ span: {}..{}, words: {}, oov: {} }}",
            self.start, self.end, self.info.word_count, self.info.oov_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_repr() {
        let info = FilteringInfo::new(3, 0);
        assert_eq!(format!("{info}"), "FilteringInfo(word_count=3, oov_count=0)");
    }

    #[test]
    fn test_oov_ratio_zero_words() {
        assert!(FilteringInfo::default().oov_ratio().abs() < f32::EPSILON);
    }

    #[test]
    fn test_chunk_accessors() {
        let chunk = Chunk::new("the cat", 2, 9, FilteringInfo::new(2, 0));
        assert_eq!(chunk.len(), 7);
        assert!(!chunk.is_empty());
        assert_eq!(chunk.span(), 2..9);
        assert_eq!(chunk.to_string(), "Chunk { span: 2..9, words: 2, oov: 0 }");

        let (text, info) = chunk.into_pair();
        assert_eq!(text, "the cat");
        assert_eq!(info, FilteringInfo::new(2, 0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_chunk() {
        let chunk = Chunk::new("the cat", 2, 9, FilteringInfo::new(2, 0));
        let json = serde_json::to_string(&chunk).unwrap();
        assert_eq!(
            json,
            r#"{"text":"the cat","start":2,"end":9,"info":{"word_count":2,"oov_count":0}}"#
        );
        let back: Chunk = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chunk);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_info() {
        let info = FilteringInfo::new(5, 2);
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"word_count":5,"oov_count":2}"#);
        let back: FilteringInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
