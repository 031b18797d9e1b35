// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index storage and lookup, with or without TF-IDF ranking.
//!
//! # INVARIANTS
//!
//! 1. **CONJUNCTIVE**: a document is returned only if every query token maps to it
//! 2. **NO_TOKENS_NO_RESULTS**: an empty token list returns nothing
//! 3. **STABLE_TIES**: equal scores keep insertion (DocId) order
//!
//! # Scoring
//!
//! ```text
//! idf(t)   = 1 + ln(N / (1 + df(t)))
//! score(d) = Σ_t tf(t, d) · idf(t)
//! ```
//!
//! `N` counts every indexed document, `df` the documents holding the token and
//! `tf` the occurrences of the (expanded) token across all indexed fields.

use crate::config::RankingMode;
use crate::types::DocId;
use std::collections::{BTreeMap, HashMap};

/// token → (document → occurrences). BTreeMap keeps documents in insertion order.
type Postings = HashMap<String, BTreeMap<DocId, u32>>;

pub trait TokenIndex: Send + Sync {
    fn index_token(&mut self, token: String, doc: DocId);

    /// Documents matching every token, best first when ranked.
    fn search(&self, tokens: &[String], corpus_size: usize) -> Vec<(DocId, Option<f64>)>;

    fn document_frequency(&self, token: &str) -> usize;

    fn vocabulary_size(&self) -> usize;

    /// Total (token, document) pairs.
    fn posting_count(&self) -> usize;

    fn mode(&self) -> RankingMode;
}

fn record(postings: &mut Postings, token: String, doc: DocId) {
    *postings.entry(token).or_default().entry(doc).or_insert(0) += 1;
}

fn matching_docs(postings: &Postings, tokens: &[String]) -> Vec<DocId> {
    let mut candidates: Option<Vec<DocId>> = None;
    for token in tokens {
        // Any unknown token empties the conjunction.
        let Some(docs) = postings.get(token) else {
            return Vec::new();
        };
        candidates = Some(match candidates {
            None => docs.keys().copied().collect(),
            Some(previous) => previous
                .into_iter()
                .filter(|doc| docs.contains_key(doc))
                .collect(),
        });
    }
    candidates.unwrap_or_default()
}

fn posting_count(postings: &Postings) -> usize {
    postings.values().map(BTreeMap::len).sum()
}

/// Ranked index.
#[derive(Debug, Default)]
pub struct TfIdfTokenIndex {
    postings: Postings,
}

impl TfIdfTokenIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn idf(&self, token: &str, corpus_size: usize) -> f64 {
        let df = self.document_frequency(token);
        let idf = 1.0 + (corpus_size as f64 / (1.0 + df as f64)).ln();
        if idf.is_finite() {
            idf
        } else {
            0.0
        }
    }

    pub fn term_frequency(&self, token: &str, doc: DocId) -> u32 {
        self.postings
            .get(token)
            .and_then(|docs| docs.get(&doc))
            .copied()
            .unwrap_or(0)
    }

    pub fn score(&self, tokens: &[String], doc: DocId, corpus_size: usize) -> f64 {
        tokens
            .iter()
            .map(|token| f64::from(self.term_frequency(token, doc)) * self.idf(token, corpus_size))
            .sum()
    }
}

impl TokenIndex for TfIdfTokenIndex {
    fn index_token(&mut self, token: String, doc: DocId) {
        record(&mut self.postings, token, doc);
    }

    fn search(&self, tokens: &[String], corpus_size: usize) -> Vec<(DocId, Option<f64>)> {
        let mut scored: Vec<(DocId, f64)> = matching_docs(&self.postings, tokens)
            .into_iter()
            .map(|doc| (doc, self.score(tokens, doc, corpus_size)))
            .collect();
        // sort_by is stable: equal scores stay in DocId order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
            .into_iter()
            .map(|(doc, score)| (doc, Some(score)))
            .collect()
    }

    fn document_frequency(&self, token: &str) -> usize {
        self.postings.get(token).map_or(0, BTreeMap::len)
    }

    fn vocabulary_size(&self) -> usize {
        self.postings.len()
    }

    fn posting_count(&self) -> usize {
        posting_count(&self.postings)
    }

    fn mode(&self) -> RankingMode {
        RankingMode::TfIdf
    }
}

/// Unranked index: matches come back in insertion order.
#[derive(Debug, Default)]
pub struct UnorderedTokenIndex {
    postings: Postings,
}

impl UnorderedTokenIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenIndex for UnorderedTokenIndex {
    fn index_token(&mut self, token: String, doc: DocId) {
        record(&mut self.postings, token, doc);
    }

    fn search(&self, tokens: &[String], _corpus_size: usize) -> Vec<(DocId, Option<f64>)> {
        matching_docs(&self.postings, tokens)
            .into_iter()
            .map(|doc| (doc, None))
            .collect()
    }

    fn document_frequency(&self, token: &str) -> usize {
        self.postings.get(token).map_or(0, BTreeMap::len)
    }

    fn vocabulary_size(&self) -> usize {
        self.postings.len()
    }

    fn posting_count(&self) -> usize {
        posting_count(&self.postings)
    }

    fn mode(&self) -> RankingMode {
        RankingMode::Unordered
    }
}

impl RankingMode {
    pub fn token_index(self) -> Box<dyn TokenIndex> {
        match self {
            RankingMode::TfIdf => Box::new(TfIdfTokenIndex::new()),
            RankingMode::Unordered => Box::new(UnorderedTokenIndex::new()),
        }
    }
}
