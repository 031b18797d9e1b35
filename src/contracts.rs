// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for query results and highlight output.
//!
//! Every check is a `debug_assert!`: it costs nothing in release builds and
//! fails loudly in tests and debug builds.
//!
//! | Contract                      | Property                                      |
//! |-------------------------------|-----------------------------------------------|
//! | `check_results_subset`        | every result is an indexed document, once     |
//! | `check_ranked_order`          | scores never increase down the result list    |
//! | `check_similar_words_ordered` | distinct, non-empty, longest first            |
//! | `check_spans_reconstruct`     | spans are non-empty and rebuild the input     |

use crate::types::{DocId, Span};
use std::collections::HashSet;

// ============================================================================
// QUERY CONTRACTS
// ============================================================================

/// Results reference indexed documents only, each at most once.
///
/// # Panics (debug builds only)
/// Panics on an out-of-range or repeated `DocId`.
#[inline]
pub fn check_results_subset(results: &[(DocId, Option<f64>)], corpus_size: usize) {
    let mut seen = HashSet::with_capacity(results.len());
    for (i, (doc_id, _)) in results.iter().enumerate() {
        debug_assert!(
            doc_id.as_usize() < corpus_size,
            "Contract violation: results[{}] = {:?} outside corpus of {}",
            i,
            doc_id,
            corpus_size
        );
        debug_assert!(
            seen.insert(*doc_id),
            "Contract violation: results[{}] = {:?} returned twice",
            i,
            doc_id
        );
    }
}

/// Scored results are sorted by descending score, ties by ascending DocId.
///
/// # Panics (debug builds only)
/// Panics if an adjacent pair is out of order. Unscored pairs are skipped.
#[inline]
pub fn check_ranked_order(results: &[(DocId, Option<f64>)]) {
    for (i, pair) in results.windows(2).enumerate() {
        if let ((prev_id, Some(prev)), (curr_id, Some(curr))) = (pair[0], pair[1]) {
            debug_assert!(
                prev > curr || (prev == curr && prev_id < curr_id),
                "Contract violation: results[{}] ({:?}, {}) ranked above ({:?}, {})",
                i,
                prev_id,
                prev,
                curr_id,
                curr
            );
        }
    }
}

// ============================================================================
// HIGHLIGHT CONTRACTS
// ============================================================================

/// Similar words are distinct, non-empty and sorted longest first.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_similar_words_ordered(words: &[String]) {
    let mut seen = HashSet::with_capacity(words.len());
    for (i, word) in words.iter().enumerate() {
        debug_assert!(
            !word.is_empty(),
            "Contract violation: similar word {} is empty",
            i
        );
        debug_assert!(
            seen.insert(word.as_str()),
            "Contract violation: similar word '{}' repeated",
            word
        );
    }
    for (i, pair) in words.windows(2).enumerate() {
        debug_assert!(
            pair[0].chars().count() >= pair[1].chars().count(),
            "Contract violation: similar word {} ('{}') shorter than the next ('{}')",
            i,
            pair[0],
            pair[1]
        );
    }
}

/// Spans are non-empty and concatenate back to `text`.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_spans_reconstruct(text: &str, spans: &[Span]) {
    debug_assert!(
        spans.iter().all(|span| !span.text.is_empty()),
        "Contract violation: empty span emitted for '{}'",
        text.chars().take(40).collect::<String>()
    );
    if cfg!(debug_assertions) {
        let rebuilt: String = spans.iter().map(|span| span.text.as_str()).collect();
        debug_assert!(
            rebuilt == text,
            "Contract violation: spans do not reconstruct '{}'",
            text.chars().take(40).collect::<String>()
        );
    }
}
