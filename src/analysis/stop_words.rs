// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! English stop words, loaded from `data/stop_words.json`.
//!
//! The list is the classic 119-word set most JavaScript search libraries ship.
//! Lookups are case-sensitive: with the case-sensitive sanitiser "The" survives
//! while "the" does not.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let json_str = include_str!("../../data/stop_words.json");
    parse_stop_words_json(json_str)
});

/// Flatten `{ "lang": ["word", ...], ... }` into one set.
fn parse_stop_words_json(json_str: &str) -> HashSet<String> {
    match serde_json::from_str::<BTreeMap<String, Vec<String>>>(json_str) {
        Ok(languages) => languages.into_values().flatten().collect(),
        Err(e) => {
            tracing::error!(error = %e, "stop word list is not valid JSON");
            HashSet::new()
        }
    }
}

#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

pub fn stop_word_count() -> usize {
    STOP_WORDS.len()
}
