// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search index: build once from a post collection, query many times.
//!
//! ```text
//! field text ─▶ sanitize ─▶ tokenize ─▶ stop words ─▶ stem ─▶ expand ─▶ postings
//! query      ─▶ sanitize ─▶ tokenize ─▶ stop words ─▶ stem ──────────▶ lookup
//! ```
//!
//! Every axis (strategy, sanitiser, ranking) is picked from the configuration
//! when the index is built and never changes afterwards. A changed collection
//! or configuration means building a new `SearchIndex`.

mod strategy;
mod token_index;

pub use strategy::{
    AllSubstringsIndexStrategy, ExactWordIndexStrategy, IndexStrategy, PrefixIndexStrategy,
};
pub use token_index::{TfIdfTokenIndex, TokenIndex, UnorderedTokenIndex};

use crate::analysis::Analyzer;
use crate::config::IndexConfiguration;
use crate::contracts::{check_ranked_order, check_results_subset};
use crate::error::IndexError;
use crate::types::{DocId, Document, Hit};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Size of a built index, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Indexed documents (duplicates excluded).
    pub documents: usize,
    /// Distinct expanded tokens.
    pub vocabulary: usize,
    /// (token, document) pairs.
    pub postings: usize,
    /// Documents dropped because their uid was already taken.
    pub skipped_duplicates: usize,
}

pub struct SearchIndex {
    config: IndexConfiguration,
    analyzer: Analyzer,
    strategy: Box<dyn IndexStrategy>,
    tokens: Box<dyn TokenIndex>,
    documents: Vec<Document>,
    uids: Vec<String>,
    by_uid: HashMap<String, DocId>,
    skipped_duplicates: usize,
}

impl SearchIndex {
    /// Index every document across every configured field.
    ///
    /// Fails only when a document has no scalar uid. Missing indexed fields
    /// count as empty text. Duplicate uids keep the first document.
    pub fn build(
        documents: impl IntoIterator<Item = Document>,
        config: IndexConfiguration,
    ) -> Result<Self, IndexError> {
        let mut index = SearchIndex {
            analyzer: Analyzer::from_config(&config),
            strategy: config.index_strategy.strategy(),
            tokens: config.ranking().token_index(),
            documents: Vec::new(),
            uids: Vec::new(),
            by_uid: HashMap::new(),
            skipped_duplicates: 0,
            config,
        };

        for (position, document) in documents.into_iter().enumerate() {
            let uid = document
                .uid(&index.config.uid_field)
                .ok_or_else(|| IndexError::MissingUid {
                    position,
                    field: index.config.uid_field.clone(),
                })?;

            if index.by_uid.contains_key(&uid) {
                warn!(uid = %uid, position, "duplicate document uid, keeping the first");
                index.skipped_duplicates += 1;
                continue;
            }

            let doc_id = DocId(index.documents.len() as u32);
            index.index_document(doc_id, &document);
            index.by_uid.insert(uid.clone(), doc_id);
            index.uids.push(uid);
            index.documents.push(document);
        }

        let stats = index.stats();
        debug!(
            documents = stats.documents,
            vocabulary = stats.vocabulary,
            postings = stats.postings,
            skipped_duplicates = stats.skipped_duplicates,
            strategy = index.config.index_strategy.as_str(),
            "built search index"
        );
        Ok(index)
    }

    fn index_document(&mut self, doc_id: DocId, document: &Document) {
        for field in &self.config.index_by {
            let text = document.text(field);
            for token in self.analyzer.analyze(&text) {
                for key in self.strategy.expand_token(&token) {
                    self.tokens.index_token(key, doc_id);
                }
            }
        }
    }

    /// Matching documents, best first when ranking is on.
    ///
    /// Any string is a valid query. One that analyses to no tokens (empty,
    /// whitespace, only stop words) matches nothing.
    pub fn query(&self, query: &str) -> Vec<&Document> {
        self.query_scored(query)
            .into_iter()
            .map(|hit| hit.document)
            .collect()
    }

    /// Like [`query`](Self::query), keeping ids and scores.
    pub fn query_scored(&self, query: &str) -> Vec<Hit<'_>> {
        let tokens = self.analyzer.analyze(query);
        trace!(query, ?tokens, "analysed query");
        if tokens.is_empty() {
            return Vec::new();
        }

        let matches = self.tokens.search(&tokens, self.documents.len());
        check_results_subset(&matches, self.documents.len());
        check_ranked_order(&matches);

        matches
            .into_iter()
            .filter_map(|(doc_id, score)| {
                Some(Hit {
                    doc_id,
                    uid: self.uids.get(doc_id.as_usize())?,
                    document: self.documents.get(doc_id.as_usize())?,
                    score,
                })
            })
            .collect()
    }

    /// The tokens a text produces under this index's pipeline (before expansion).
    pub fn analyze(&self, text: &str) -> Vec<String> {
        self.analyzer.analyze(text)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn config(&self) -> &IndexConfiguration {
        &self.config
    }

    /// Indexed documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, doc_id: DocId) -> Option<&Document> {
        self.documents.get(doc_id.as_usize())
    }

    pub fn document_by_uid(&self, uid: &str) -> Option<&Document> {
        self.by_uid.get(uid).and_then(|&id| self.document(id))
    }

    pub fn document_frequency(&self, token: &str) -> usize {
        self.tokens.document_frequency(token)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.documents.len(),
            vocabulary: self.tokens.vocabulary_size(),
            postings: self.tokens.posting_count(),
            skipped_duplicates: self.skipped_duplicates,
        }
    }
}

impl std::fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchIndex")
            .field("config", &self.config)
            .field("ranking", &self.tokens.mode())
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}
