// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows through the search and highlight pipeline.
//!
//! Documents come from the page generator as JSON objects and are never mutated
//! once handed over. The index refers to them by `DocId` (their position in the
//! collection), and results hand back borrowed references.
//!
//! # Invariants
//!
//! - **DocId**: `id < documents.len()` for the index that produced it.
//! - **Span**: never empty; concatenating a span sequence reproduces the input text.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Position of a document in the collection an index was built from.
///
/// Distinct from the document's uid (a string chosen by the page generator).
/// Ordering follows insertion order, which is also the tie-break for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for usize {
    fn from(id: DocId) -> Self {
        id.0 as usize
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// A single field value as the page generator emits it.
///
/// Blog frontmatter mixes plain strings (`postTitle`) with string arrays
/// (`tags`, `categories`). Anything else JSON can express lands in `Other`
/// and is coerced to text when indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Other(serde_json::Value),
}

impl FieldValue {
    /// The text the tokenizer sees for this value.
    ///
    /// Lists are joined with `,`, scalars use their JSON text, and `null` or
    /// nested objects become the empty string.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(text) => Cow::Borrowed(text),
            FieldValue::List(items) => Cow::Owned(items.join(",")),
            FieldValue::Other(value) => match value {
                serde_json::Value::Array(items) => Cow::Owned(
                    items
                        .iter()
                        .map(scalar_text)
                        .collect::<Vec<_>>()
                        .join(","),
                ),
                other => Cow::Owned(scalar_text(other)),
            },
        }
    }
}

fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<&[&str]> for FieldValue {
    fn from(items: &[&str]) -> Self {
        FieldValue::List(items.iter().map(|s| s.to_string()).collect())
    }
}

/// A blog post (or any record) supplied by the page generator.
///
/// Serializes as a flat JSON object: every member is a field, including the uid.
/// Which member acts as the uid is decided by `IndexConfiguration::uid_field`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: BTreeMap<String, FieldValue>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Field text, or `""` when the field is absent.
    pub fn text(&self, name: &str) -> Cow<'_, str> {
        self.field(name)
            .map(FieldValue::as_text)
            .unwrap_or(Cow::Borrowed(""))
    }

    /// The unique key stored under `uid_field`, as text.
    ///
    /// Any present scalar qualifies, the empty string included. `null`, lists
    /// and objects do not.
    pub fn uid(&self, uid_field: &str) -> Option<String> {
        match self.field(uid_field)? {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Other(serde_json::Value::Number(n)) => Some(n.to_string()),
            FieldValue::Other(serde_json::Value::Bool(b)) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// One query match: the document, its uid and (when ranking is on) its score.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit<'a> {
    pub doc_id: DocId,
    pub uid: &'a str,
    pub document: &'a Document,
    /// TF-IDF relevance; `None` for unordered indexes.
    pub score: Option<f64>,
}

/// A contiguous run of text tagged with a highlight flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub text: String,
    pub highlighted: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            highlighted: false,
        }
    }

    pub fn marked(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            highlighted: true,
        }
    }
}
