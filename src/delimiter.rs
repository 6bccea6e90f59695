//! Character classes shared by the tokenizer and the filter.
//!
//! Everything here is a fixed, process-wide constant. The delimiter set is a
//! 128-entry table built at compile time, so membership is a single index.
//!
//! ```text
//! delimiters:       ␠ . , : ; ? ! ⏎ ⇥ - ( ) [ ] { } = < > " ' & ^ % $ # @ * + / | \ ~
//! end of sentence:  . ? ! ⏎
//! ```
//!
//! Digits are ASCII `0-9` only. Anything outside ASCII is neither a
//! delimiter nor a digit and simply becomes part of a word.

/// Bytes that split tokens and become single-character tokens themselves.
pub const DELIMITERS: &[u8] = b" .,:;?!\n\t-()[]{}=<>\"'&^%$#@*+/|\\~";

/// Tokens that end a sentence.
pub const END_OF_SENTENCE: [&str; 4] = [".", "?", "!", "\n"];

const DELIMITER_TABLE: [bool; 128] = {
    let mut table = [false; 128];
    let mut i = 0;
    while i < DELIMITERS.len() {
        table[DELIMITERS[i] as usize] = true;
        i += 1;
    }
    table
};

/// Whether `c` is one of the [`DELIMITERS`].
#[inline]
#[must_use]
pub const fn is_delimiter_char(c: char) -> bool {
    c.is_ascii() && DELIMITER_TABLE[c as usize]
}

/// Whether `token` is exactly one delimiter character.
///
/// ```rust
/// use vocab_filter::is_delimiter;
///
/// assert!(is_delimiter(","));
/// assert!(!is_delimiter(",,"));
/// assert!(!is_delimiter("a"));
/// ```
#[inline]
#[must_use]
pub fn is_delimiter(token: &str) -> bool {
    match token.as_bytes() {
        [b] => b.is_ascii() && DELIMITER_TABLE[*b as usize],
        _ => false,
    }
}

/// Whether every character of `token` is an ASCII digit.
///
/// Vacuously true for the empty string; the tokenizer never produces one.
#[inline]
#[must_use]
pub fn is_integer(token: &str) -> bool {
    token.bytes().all(|b| b.is_ascii_digit())
}

/// Whether `token` is one of the [`END_OF_SENTENCE`] markers.
#[inline]
#[must_use]
pub fn is_end_of_sentence(token: &str) -> bool {
    END_OF_SENTENCE.contains(&token)
}
