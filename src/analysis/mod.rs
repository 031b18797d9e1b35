// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text analysis: sanitising, tokenizing, stop words and stemming.
//!
//! The same pipeline runs over field text at index time and over the query at
//! search time. If the two ever diverge, queries silently stop matching.

mod porter;
mod sanitizer;
mod stop_words;
mod tokenizer;

pub use porter::{stem, PorterStemmer, Stemmer};
pub use sanitizer::{CaseSensitiveSanitizer, LowerCaseSanitizer, Sanitizer};
pub use stop_words::{is_stop_word, stop_word_count};
pub use tokenizer::{SimpleTokenizer, StemmingTokenizer, StopWordsTokenizer, Tokenizer};

use crate::config::IndexConfiguration;

/// Compose the tokenizer chain: base → stop words → stemming.
pub fn build_tokenizer(remove_stop_words: bool, stem_words: bool) -> Box<dyn Tokenizer> {
    let mut tokenizer: Box<dyn Tokenizer> = Box::new(SimpleTokenizer);
    if remove_stop_words {
        tokenizer = Box::new(StopWordsTokenizer::new(tokenizer));
    }
    if stem_words {
        tokenizer = Box::new(StemmingTokenizer::new(PorterStemmer, tokenizer));
    }
    tokenizer
}

/// Sanitiser plus tokenizer, as fixed by one configuration.
pub struct Analyzer {
    sanitizer: Box<dyn Sanitizer>,
    tokenizer: Box<dyn Tokenizer>,
}

impl Analyzer {
    pub fn from_config(config: &IndexConfiguration) -> Self {
        Self {
            sanitizer: config.search_sanitiser.sanitizer(),
            tokenizer: build_tokenizer(config.remove_stop_words, config.stem_words),
        }
    }

    pub fn analyze(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(&self.sanitizer.sanitize(text))
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer").finish_non_exhaustive()
    }
}
