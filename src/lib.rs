// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Blog search with stemming-aware highlighting.
//!
//! Two independent halves share one analysis layer:
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────────┐
//! │   analysis   │────▶│    index     │────▶│ query / scored    │
//! │ (sanitise,   │     │ (strategy,   │     │ (TF-IDF or        │
//! │  stop, stem) │     │  postings)   │     │  insertion order) │
//! └──────────────┘     └──────────────┘     └───────────────────┘
//!        │
//!        ▼
//! ┌──────────────┐     ┌───────────────────┐
//! │  highlight   │────▶│ render_highlighted│
//! │ (similar     │     │ (Span sequence)   │
//! │  words)      │     │                   │
//! └──────────────┘     └───────────────────┘
//! ```
//!
//! The index answers "which posts match", the highlighter answers "which words
//! of this post to mark". Neither keeps state between calls: a changed
//! collection is a new [`SearchIndex`], a changed query is a new call.
//!
//! # Usage
//!
//! ```
//! use stemlight::{similar_words, render_highlighted, Document, IndexConfiguration, SearchIndex};
//!
//! let posts = vec![Document::new()
//!     .with_field("id", "1")
//!     .with_field("postTitle", "Folding Cameras")
//!     .with_field("body", "My folding camera goes everywhere.")];
//! let index = SearchIndex::build(posts, IndexConfiguration::default()).unwrap();
//! assert_eq!(index.query("camera").len(), 1);
//!
//! let text = "My folding camera goes everywhere.";
//! let words = similar_words("cameras", text);
//! let spans = render_highlighted(text, &words, "cameras", true);
//! assert!(spans.iter().any(|s| s.highlighted && s.text == "camera"));
//! ```

pub mod analysis;
pub mod config;
pub mod contracts;
pub mod error;
pub mod highlight;
pub mod index;
pub mod load;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{IndexConfiguration, IndexStrategyKind, RankingMode, SanitizerKind};
pub use error::{IndexError, LoadError};
pub use highlight::{
    first_highlight_offset, highlight_text, highlighted_words, render_highlighted, similar_words,
    SimilarWords, SimilarityMatcher,
};
pub use index::{IndexStats, SearchIndex};
pub use load::{load_config, load_posts, parse_config, parse_posts};
pub use types::{DocId, Document, FieldValue, Hit, Span};

#[cfg(feature = "wasm")]
pub use wasm::BlogSearch;

// Test utilities (hidden from docs, but available for integration tests)
#[doc(hidden)]
pub mod testing;
