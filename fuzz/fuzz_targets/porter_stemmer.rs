// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the Porter stemmer.
//!
//! Stemming only ever removes or rewrites suffixes, so the stem can never
//! outgrow its lower-cased input by more than the one-letter `e` restorations.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stemlight::analysis::stem;

fuzz_target!(|word: &[u8]| {
    let word: String = String::from_utf8_lossy(word).chars().take(64).collect();

    let lower = word.to_lowercase();
    let stemmed = stem(&word);

    assert!(
        stemmed.chars().count() <= lower.chars().count() + 1,
        "{:?} grew into {:?}",
        word,
        stemmed
    );
    if lower.chars().count() < 3 {
        assert_eq!(stemmed, lower);
    }
});
