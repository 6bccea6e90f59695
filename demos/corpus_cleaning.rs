//! Corpus Cleaning
//!
//! Keep the readable spans of a noisy document.
//!
//! ```bash
//! cargo run --example corpus_cleaning
//! ```

use std::collections::HashSet;

use vocab_filter::VocabFilter;

fn main() {
    let document = "Home | About | Contact\n\
        The committee met on 12 March to review the budget. \
        Members agreed that spending on roads should rise by 4% next year.\n\
        qzx9 0xDEADBEEF lorem ipsum dolor sit amet &amp;&amp; ##### \n\
        The vote will take place in April. Results will be published online.";

    let vocab: HashSet<&str> = [
        "the", "committee", "met", "on", "march", "to", "review", "budget", "members", "agreed",
        "that", "spending", "roads", "should", "rise", "by", "next", "year", "vote", "will",
        "take", "place", "in", "april", "results", "be", "published", "online",
    ]
    .into_iter()
    .collect();

    let filter = VocabFilter::new(4, 0.0)
        .expect("0.0 is a valid ratio")
        .sentence_start_only(true);
    let chunks = filter.filter(document, &vocab);

    println!("Document: {} bytes", document.len());
    println!("Kept: {} chunks\n", chunks.len());

    for (i, chunk) in chunks.iter().enumerate() {
        println!("[{}] {} {:?}", i, chunk.info, chunk.text);
    }

    // The menu line closes on its first word and is skipped up to the
    // newline; the garbage line closes the budget paragraph and is skipped
    // the same way. Two clean chunks remain.
}
