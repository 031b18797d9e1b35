// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-term highlighting for post text.
//!
//! Two pure steps, rerun whenever the search term changes:
//!
//! 1. [`similar_words`]: which words of this text are variants of the term
//! 2. [`render_highlighted`]: cut the text into spans around those words
//!
//! Neither step depends on the search index.

mod render;
mod similar;

pub use render::{first_highlight_offset, highlighted_words, render_highlighted};
pub use similar::{similar_words, split_words, SimilarWords, SimilarityMatcher};

use crate::types::Span;

/// Both steps in one call.
pub fn highlight_text(search_term: &str, text: &str, case_insensitive: bool) -> Vec<Span> {
    let words = similar_words(search_term, text);
    render_highlighted(text, &words, search_term, case_insensitive)
}
