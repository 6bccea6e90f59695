//! Hand-traced filtering scenarios.
//!
//! Each test walks a short input token by token. The traces pin down the
//! order of operations: a word is counted before it is classified, so the
//! word that closes a chunk shows up in that chunk's counts but not in its
//! text.

use std::collections::HashSet;

use vocab_filter::{filter_vocab, tokenize, FilteringInfo, VocabFilter};

fn vocab(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

fn pair(text: &str, word_count: usize, oov_count: usize) -> (String, FilteringInfo) {
    (text.to_string(), FilteringInfo::new(word_count, oov_count))
}

// =============================================================================
// Tokenizer
// =============================================================================

#[test]
fn tokenize_reference_examples() {
    assert!(tokenize("").is_empty());
    assert_eq!(tokenize("a1b2"), vec!["a", "1", "b", "2"]);
    assert_eq!(tokenize("hello, world!"), vec!["hello", ",", " ", "world", "!"]);
    assert_eq!(tokenize("abc123def"), vec!["abc", "123", "def"]);
    assert_eq!(tokenize("?!."), vec!["?", "!", "."]);
}

// =============================================================================
// OOV discard
// =============================================================================

#[test]
fn all_in_vocabulary() {
    let chunks = filter_vocab("the cat sat", &vocab(&["the", "cat", "sat"]), 1, 0.5, false);
    assert_eq!(chunks, vec![pair("the cat sat", 3, 0)]);
}

#[test]
fn closing_word_is_counted_but_not_kept() {
    // "the"  -> words 1, kept
    // "xyz"  -> words 2, oov 1, 1 / max(2, 1) = 0.5 > 0.0, chunk closes
    //           "the" has 2 > 1 words, emitted with the closing word counted
    // "cat"  -> words 1, oov 1, 1 / max(1, 1) = 1.0 > 0.0, closes empty, 1 <= 1, dropped
    let chunks = filter_vocab("the xyz cat", &vocab(&["the"]), 1, 0.0, false);
    assert_eq!(chunks, vec![pair("the", 2, 1)]);
}

#[test]
fn closing_word_does_not_start_next_chunk() {
    let v = vocab(&["the", "cat", "sat", "on", "mat"]);
    let chunks = filter_vocab("the cat sat on the xqzv glorp mat on the mat", &v, 1, 0.2, false);
    // "xqzv" is tolerated at 1/6, "glorp" closes at 2/7.
    assert_eq!(
        chunks,
        vec![
            pair("the cat sat on the xqzv", 7, 2),
            pair("mat on the mat", 4, 0),
        ]
    );
}

#[test]
fn short_chunk_before_oov_is_dropped() {
    let v = vocab(&["the", "cat", "sat"]);
    let chunks = filter_vocab("cat zzz the cat sat", &v, 2, 0.0, false);
    // "cat zzz" closes with 2 words, not more than 2.
    assert_eq!(chunks, vec![pair("the cat sat", 3, 0)]);
}

#[test]
fn numbers_and_punctuation_are_always_known() {
    let v = vocab(&["in", "roughly", "agreed"]);
    let chunks = filter_vocab("In 1999, (roughly) 42% agreed.", &v, 1, 0.0, false);
    assert_eq!(chunks, vec![pair("In 1999, (roughly) 42% agreed.", 5, 0)]);
}

#[test]
fn delimiters_alone_never_make_a_chunk() {
    assert!(filter_vocab("... ,, !?", &vocab(&[]), 0, 0.0, false).is_empty());
}

#[test]
fn zero_threshold_with_floor() {
    // Any OOV word closes the chunk when p_max_oov is zero.
    let v = vocab(&["a", "b", "c", "d"]);
    let chunks = filter_vocab("a b c d x a b c d", &v, 3, 0.0, false);
    assert_eq!(chunks, vec![pair("a b c d", 5, 1), pair("a b c d", 4, 0)]);
}

#[test]
fn threshold_is_inclusive() {
    // 1 / max(4, 3) = 0.25, equal to the threshold, so kept.
    let chunks = filter_vocab("a b c x", &vocab(&["a", "b", "c"]), 3, 0.25, false);
    assert_eq!(chunks, vec![pair("a b c x", 4, 1)]);
}

#[test]
fn trailing_space_and_newline_trimmed_on_discard() {
    let chunks = filter_vocab("a b c \n zzz", &vocab(&["a", "b", "c"]), 1, 0.0, false);
    assert_eq!(chunks, vec![pair("a b c", 4, 1)]);
}

#[test]
fn leading_whitespace_never_starts_a_chunk() {
    let chunks = filter_vocab(" \n \na b", &vocab(&["a", "b"]), 1, 0.0, false);
    assert_eq!(chunks, vec![pair("a b", 2, 0)]);

    // Tabs are not skipped.
    let chunks = filter_vocab("\ta b", &vocab(&["a", "b"]), 1, 0.0, false);
    assert_eq!(chunks, vec![pair("\ta b", 2, 0)]);
}

// =============================================================================
// Sentence starts
// =============================================================================

#[test]
fn sentence_mode_all_known_is_one_chunk() {
    let v = vocab(&["hello", "world", "foo", "bar"]);
    let chunks = filter_vocab("Hello world. Foo bar", &v, 1, 0.0, true);
    assert_eq!(chunks, vec![pair("Hello world. Foo bar", 4, 0)]);
}

#[test]
fn sentence_mode_waits_for_sentence_end() {
    // "world" closes the first chunk mid-sentence. The rest of the sentence
    // is skipped uncounted until "." reopens, and the space after it is
    // skipped without losing the sentence start.
    let v = vocab(&["hello", "foo", "bar", "baz"]);
    let chunks = filter_vocab("Hello world foo bar. Foo bar", &v, 0, 0.0, true);
    assert_eq!(chunks, vec![pair("Hello", 2, 1), pair("Foo bar", 2, 0)]);

    // Without sentence mode the words after "world" start a new chunk at once.
    let chunks = filter_vocab("Hello world foo bar. Foo bar", &v, 0, 0.0, false);
    assert_eq!(chunks, vec![pair("Hello", 2, 1), pair("foo bar. Foo bar", 4, 0)]);
}

#[test]
fn sentence_mode_newline_is_a_sentence_end() {
    let v = vocab(&["good", "line"]);
    let chunks = filter_vocab("junk good line\ngood line", &v, 1, 0.0, true);
    // "junk" closes an empty chunk at once (1 word, not more than 1),
    // then everything up to the newline is skipped.
    assert_eq!(chunks, vec![pair("good line", 2, 0)]);
}

#[test]
fn sentence_mode_spans() {
    let v = vocab(&["hello", "foo", "bar"]);
    let text = "Hello world! Foo bar";
    let chunks = VocabFilter::new(0, 0.0)
        .unwrap()
        .sentence_start_only(true)
        .filter(text, &v);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[1].text, "Foo bar");
    assert_eq!(chunks[1].span(), 13..20);
}

// =============================================================================
// Degenerate parameters
// =============================================================================

#[test]
fn empty_inputs() {
    assert!(filter_vocab("", &vocab(&[]), 0, 0.0, false).is_empty());
    assert!(filter_vocab("", &vocab(&["a"]), 0, 1.0, true).is_empty());
}

#[test]
fn negative_threshold_closes_on_every_oov() {
    // Even with a large floor, any ratio above zero exceeds a negative threshold.
    let v = vocab(&["a", "b", "c", "d"]);
    let chunks = filter_vocab("a b c d x", &v, 100, -0.5, false);
    assert!(chunks.is_empty());

    let chunks = filter_vocab("a b x", &vocab(&["a", "b"]), 0, -0.5, false);
    assert_eq!(chunks, vec![pair("a b", 3, 1)]);
}
