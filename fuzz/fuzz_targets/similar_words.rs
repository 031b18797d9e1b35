// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for similar word collection.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stemlight::similar_words;

#[derive(Debug, Arbitrary)]
struct SimilarInput {
    term: String,
    text: String,
}

fuzz_target!(|input: SimilarInput| {
    let term: String = input.term.chars().take(50).collect();
    let text: String = input.text.chars().take(500).collect();

    let words = similar_words(&term, &text);

    let mut seen = std::collections::HashSet::new();
    for word in words.iter() {
        assert!(!word.is_empty());
        assert!(seen.insert(word.as_str()), "duplicate {:?}", word);
    }
    for pair in words.windows(2) {
        assert!(pair[0].chars().count() >= pair[1].chars().count());
    }
});
