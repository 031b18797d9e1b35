// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Split text into highlighted and plain spans.
//!
//! # INVARIANTS
//!
//! 1. **LOSSLESS**: concatenating the span texts reproduces the input exactly
//! 2. **NON_EMPTY**: no span has empty text
//! 3. **LONGEST_FIRST**: targets are tried in the order given, so callers pass
//!    them longest first (see [`SimilarWords`](super::SimilarWords))

use crate::contracts::check_spans_reconstruct;
use crate::types::Span;
use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Partition `text` around every occurrence of any target.
///
/// With no usable targets the trimmed `search_term` is matched instead, so a
/// first render before similar words are known still shows the literal term.
/// Targets are matched literally. A fragment is highlighted when it equals a
/// target, ignoring case (Unicode simple case folding) when
/// `case_insensitive` is set.
pub fn render_highlighted<T: AsRef<str>>(
    text: &str,
    targets: &[T],
    search_term: &str,
    case_insensitive: bool,
) -> Vec<Span> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut patterns: Vec<&str> = targets
        .iter()
        .map(|target| target.as_ref())
        .filter(|target| !target.is_empty())
        .collect();
    if patterns.is_empty() {
        let term = search_term.trim();
        if term.is_empty() {
            return vec![Span::plain(text)];
        }
        patterns.push(term);
    }

    let Some(regex) = build_pattern(&patterns, case_insensitive) else {
        return vec![Span::plain(text)];
    };

    // Matches equal a target under the regex's case folding; gaps never do.
    let mut spans = Vec::new();
    let mut push = |fragment: &str, highlighted: bool| {
        if !fragment.is_empty() {
            spans.push(Span {
                text: fragment.to_string(),
                highlighted,
            });
        }
    };

    let mut last = 0;
    for found in regex.find_iter(text) {
        push(&text[last..found.start()], false);
        push(found.as_str(), true);
        last = found.end();
    }
    push(&text[last..], false);

    check_spans_reconstruct(text, &spans);
    spans
}

/// One alternation over the escaped patterns, in order.
fn build_pattern(patterns: &[&str], case_insensitive: bool) -> Option<Regex> {
    let alternation = patterns
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    match RegexBuilder::new(&alternation)
        .case_insensitive(case_insensitive)
        .build()
    {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!(error = %e, patterns = patterns.len(), "highlight pattern rejected");
            None
        }
    }
}

/// Byte offset of the first highlighted span, if any.
pub fn first_highlight_offset(spans: &[Span]) -> Option<usize> {
    let mut offset = 0;
    for span in spans {
        if span.highlighted {
            return Some(offset);
        }
        offset += span.text.len();
    }
    None
}

/// Texts of the highlighted spans, in order.
pub fn highlighted_words(spans: &[Span]) -> Vec<&str> {
    spans
        .iter()
        .filter(|span| span.highlighted)
        .map(|span| span.text.as_str())
        .collect()
}
