// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deployment configuration for a search index.
//!
//! The configuration is a build-time constant of the site, not user input, so
//! nothing here fails: an unknown strategy or sanitiser name falls back to the
//! documented default (prefix match, lower case) and logs a warning.
//!
//! The JSON keys match the site's `search` config file:
//!
//! ```json
//! {
//!   "indexStrategy": "Prefix match",
//!   "searchSanitiser": "Lower case",
//!   "indexBy": ["body", "postTitle"],
//!   "termFrequency": true,
//!   "removeStopWords": true,
//!   "stemWords": true
//! }
//! ```

use serde::{Deserialize, Serialize};

/// How tokens are expanded at index time, which decides what a query token matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IndexStrategyKind {
    /// Query token must be a substring of an indexed token (`"All"`).
    AllSubstrings,
    /// Query token must equal an indexed token (`"Exact match"`).
    ExactWord,
    /// Query token must be a prefix of an indexed token (`"Prefix match"`).
    #[default]
    Prefix,
}

impl IndexStrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IndexStrategyKind::AllSubstrings => "All",
            IndexStrategyKind::ExactWord => "Exact match",
            IndexStrategyKind::Prefix => "Prefix match",
        }
    }
}

impl From<&str> for IndexStrategyKind {
    fn from(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "all" => IndexStrategyKind::AllSubstrings,
            "exact match" => IndexStrategyKind::ExactWord,
            "prefix match" => IndexStrategyKind::Prefix,
            _ => {
                tracing::warn!(
                    value = name,
                    fallback = IndexStrategyKind::default().as_str(),
                    "unknown indexStrategy"
                );
                IndexStrategyKind::default()
            }
        }
    }
}

impl From<String> for IndexStrategyKind {
    fn from(name: String) -> Self {
        IndexStrategyKind::from(name.as_str())
    }
}

impl From<IndexStrategyKind> for String {
    fn from(kind: IndexStrategyKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Normalisation applied to field text and query text before tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SanitizerKind {
    /// Trim only.
    CaseSensitive,
    /// Lower-case, then trim.
    #[default]
    LowerCase,
}

impl SanitizerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SanitizerKind::CaseSensitive => "Case sensitive",
            SanitizerKind::LowerCase => "Lower case",
        }
    }
}

impl From<&str> for SanitizerKind {
    fn from(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "case sensitive" => SanitizerKind::CaseSensitive,
            "lower case" => SanitizerKind::LowerCase,
            _ => {
                tracing::warn!(
                    value = name,
                    fallback = SanitizerKind::default().as_str(),
                    "unknown searchSanitiser"
                );
                SanitizerKind::default()
            }
        }
    }
}

impl From<String> for SanitizerKind {
    fn from(name: String) -> Self {
        SanitizerKind::from(name.as_str())
    }
}

impl From<SanitizerKind> for String {
    fn from(kind: SanitizerKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Whether results are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankingMode {
    /// Term frequency x inverse document frequency, best first.
    TfIdf,
    /// Insertion order, no scores.
    Unordered,
}

/// Everything fixed for the lifetime of one `SearchIndex`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexConfiguration {
    /// Field holding each document's unique key.
    pub uid_field: String,
    /// Fields to index, in order.
    pub index_by: Vec<String>,
    pub index_strategy: IndexStrategyKind,
    pub search_sanitiser: SanitizerKind,
    /// Rank results by TF-IDF instead of returning them unordered.
    pub term_frequency: bool,
    pub remove_stop_words: bool,
    pub stem_words: bool,
}

impl Default for IndexConfiguration {
    fn default() -> Self {
        Self {
            uid_field: "id".to_string(),
            index_by: vec!["body".to_string(), "postTitle".to_string()],
            index_strategy: IndexStrategyKind::Prefix,
            search_sanitiser: SanitizerKind::LowerCase,
            term_frequency: true,
            remove_stop_words: true,
            stem_words: true,
        }
    }
}

impl IndexConfiguration {
    pub fn ranking(&self) -> RankingMode {
        if self.term_frequency {
            RankingMode::TfIdf
        } else {
            RankingMode::Unordered
        }
    }

    pub fn with_index_by<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_by = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_strategy(mut self, strategy: IndexStrategyKind) -> Self {
        self.index_strategy = strategy;
        self
    }

    pub fn with_sanitiser(mut self, sanitiser: SanitizerKind) -> Self {
        self.search_sanitiser = sanitiser;
        self
    }

    pub fn with_term_frequency(mut self, enabled: bool) -> Self {
        self.term_frequency = enabled;
        self
    }

    pub fn with_stop_words(mut self, enabled: bool) -> Self {
        self.remove_stop_words = enabled;
        self
    }

    pub fn with_stemming(mut self, enabled: bool) -> Self {
        self.stem_words = enabled;
        self
    }
}
