//! Splitting text into atomic tokens.
//!
//! ## The Rules
//!
//! The tokenizer makes one pass over the input and recognises three kinds of
//! token:
//!
//! - a **delimiter**: any single character from [`DELIMITERS`](crate::DELIMITERS),
//!   always emitted on its own, never merged with a neighbour
//! - a **digit run**: a maximal run of ASCII digits
//! - a **word run**: a maximal run of everything else
//!
//! A change in digit-ness ends the current run even without a delimiter in
//! between, so letters and numbers glued together come apart:
//!
//! ```text
//! "abc123def"      -> ["abc", "123", "def"]
//! "hello, world!"  -> ["hello", ",", " ", "world", "!"]
//! "a--b"           -> ["a", "-", "-", "b"]
//! "v2.0"           -> ["v", "2", ".", "0"]
//! ```
//!
//! No character is ever dropped: concatenating the tokens gives back the
//! input, byte for byte.
//!
//! ## Borrowing
//!
//! [`token_indices`] and [`tokens`] borrow from the input and allocate
//! nothing. [`tokenize`] collects owned strings for callers that need them.

use std::str::CharIndices;

use crate::delimiter::is_delimiter_char;

/// Iterator over the tokens of a string and their byte offsets.
///
/// Created by [`token_indices`]. Works like [`str::char_indices`], one token
/// at a time.
///
/// ```rust
/// use vocab_filter::token_indices;
///
/// let found: Vec<_> = token_indices("ab12 c").collect();
/// assert_eq!(found, vec![(0, "ab"), (2, "12"), (4, " "), (5, "c")]);
/// ```
#[derive(Debug, Clone)]
pub struct TokenIndices<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    run_start: Option<usize>,
    last_numeric: bool,
    // A delimiter found right after a run; returned on the next call.
    queued: Option<(usize, &'a str)>,
}

impl<'a> TokenIndices<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices(),
            run_start: None,
            last_numeric: text.as_bytes().first().is_some_and(u8::is_ascii_digit),
            queued: None,
        }
    }

    fn take_run(&mut self, end: usize) -> Option<(usize, &'a str)> {
        self.run_start
            .take()
            .map(|start| (start, &self.text[start..end]))
    }
}

impl<'a> Iterator for TokenIndices<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.queued.take() {
            return Some(token);
        }

        while let Some((i, c)) = self.chars.next() {
            let numeric = c.is_ascii_digit();
            let digit_boundary = numeric != self.last_numeric;
            self.last_numeric = numeric;

            if is_delimiter_char(c) {
                // Delimiters are ASCII, so one byte wide.
                let delimiter = (i, &self.text[i..=i]);
                if let Some(run) = self.take_run(i) {
                    self.queued = Some(delimiter);
                    return Some(run);
                }
                return Some(delimiter);
            }

            if digit_boundary {
                let run = self.take_run(i);
                self.run_start = Some(i);
                if run.is_some() {
                    return run;
                }
            } else if self.run_start.is_none() {
                self.run_start = Some(i);
            }
        }

        self.take_run(self.text.len())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.chars.offset();
        let pending = usize::from(self.queued.is_some()) + usize::from(self.run_start.is_some());
        (pending.min(1), Some(remaining + pending))
    }
}

impl std::iter::FusedIterator for TokenIndices<'_> {}

/// Iterate over tokens together with their byte offsets in `text`.
#[must_use]
pub fn token_indices(text: &str) -> TokenIndices<'_> {
    TokenIndices::new(text)
}

/// Iterate over tokens, borrowing from `text`.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> + '_ {
    token_indices(text).map(|(_, token)| token)
}

/// Split `text` into tokens.
///
/// Empty input yields an empty vector.
///
/// ```rust
/// use vocab_filter::tokenize;
///
/// assert_eq!(tokenize("a1b2"), vec!["a", "1", "b", "2"]);
/// assert_eq!(tokenize("hello, world!"), vec!["hello", ",", " ", "world", "!"]);
/// assert!(tokenize("").is_empty());
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    tokens(text).map(str::to_owned).collect()
}
