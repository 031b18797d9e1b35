// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word forms in a text that share a stem with the search term.
//!
//! Searching "camera" should light up "cameras" in a post, and searching a
//! word the post never uses should still highlight the word itself. The
//! result feeds [`render_highlighted`](super::render_highlighted), which needs
//! longer words first so "aardvarks" is not cut short by "aardvark".

use crate::analysis::{PorterStemmer, Stemmer};
use crate::contracts::check_similar_words_ordered;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::ops::Deref;

/// Whitespace plus `! . _ , ' @ ?`.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '!' | '.' | '_' | ',' | '\'' | '@' | '?')
}

/// Words of `text`, with separator runs collapsed and no empty words.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|word| !word.is_empty())
}

/// Distinct, non-empty words sorted by descending length.
///
/// Ties keep the order in which the words were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SimilarWords(Vec<String>);

impl SimilarWords {
    fn from_candidates(candidates: Vec<String>) -> Self {
        let mut seen = HashSet::new();
        let mut words: Vec<String> = candidates
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();
        words.sort_by_key(|word| Reverse(word.chars().count()));
        check_similar_words_ordered(&words);
        SimilarWords(words)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| w == word)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for SimilarWords {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a SimilarWords {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<SimilarWords> for Vec<String> {
    fn from(words: SimilarWords) -> Self {
        words.0
    }
}

/// Finds stem-equivalent word forms, parameterised over the stemmer.
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatcher<S = PorterStemmer> {
    stemmer: S,
}

impl SimilarityMatcher {
    pub fn new() -> Self {
        Self::with_stemmer(PorterStemmer)
    }
}

impl<S: Stemmer> SimilarityMatcher<S> {
    pub fn with_stemmer(stemmer: S) -> Self {
        Self { stemmer }
    }

    /// For each word of `search_term`: every lowercased word of `text` with
    /// the same stem, or the search word itself (case as given) when none has.
    pub fn similar_words(&self, search_term: &str, text: &str) -> SimilarWords {
        let text_words: Vec<(String, String)> = split_words(text)
            .map(|word| {
                let lower = word.to_lowercase();
                let stem = self.stemmer.stem(&lower);
                (lower, stem)
            })
            .collect();

        let mut candidates = Vec::new();
        for term in split_words(search_term) {
            let term_stem = self.stemmer.stem(&term.to_lowercase());
            let before = candidates.len();
            candidates.extend(
                text_words
                    .iter()
                    .filter(|(_, stem)| *stem == term_stem)
                    .map(|(word, _)| word.clone()),
            );
            if candidates.len() == before {
                candidates.push(term.to_string());
            }
        }

        SimilarWords::from_candidates(candidates)
    }
}

/// [`SimilarityMatcher::similar_words`] with the Porter stemmer.
pub fn similar_words(search_term: &str, text: &str) -> SimilarWords {
    SimilarityMatcher::new().similar_words(search_term, text)
}
