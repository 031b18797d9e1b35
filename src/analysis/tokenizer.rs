// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenizers and the filters that wrap them.
//!
//! Filters decorate an inner tokenizer, so the pipeline order is the wrapping
//! order: `Stemming(StopWords(Simple))` removes stop words from unstemmed
//! tokens and stems whatever survives. Reversing it would let "was" slip
//! through as the stem "wa".

use super::porter::Stemmer;
use super::stop_words::is_stop_word;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Splits on anything that is not alphanumeric, `-` or `'`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTokenizer;

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '\''
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !is_token_char(c))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Drops stop words produced by the inner tokenizer.
pub struct StopWordsTokenizer<T> {
    inner: T,
}

impl<T: Tokenizer> StopWordsTokenizer<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: Tokenizer> Tokenizer for StopWordsTokenizer<T> {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.inner
            .tokenize(text)
            .into_iter()
            .filter(|token| !is_stop_word(token))
            .collect()
    }
}

/// Stems every token from the inner tokenizer, dropping those that stem to nothing.
pub struct StemmingTokenizer<S, T> {
    stemmer: S,
    inner: T,
}

impl<S: Stemmer, T: Tokenizer> StemmingTokenizer<S, T> {
    pub fn new(stemmer: S, inner: T) -> Self {
        Self { stemmer, inner }
    }
}

impl<S: Stemmer, T: Tokenizer> Tokenizer for StemmingTokenizer<S, T> {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.inner
            .tokenize(text)
            .into_iter()
            .map(|token| self.stemmer.stem(&token))
            .filter(|stem| !stem.is_empty())
            .collect()
    }
}

impl Tokenizer for Box<dyn Tokenizer> {
    fn tokenize(&self, text: &str) -> Vec<String> {
        (**self).tokenize(text)
    }
}
