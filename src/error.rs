// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors that reach the caller.
//!
//! Almost nothing does. Unknown configuration values, documents with missing
//! fields, queries of any shape and highlight patterns the regex engine rejects
//! are all recovered where they happen. What is left is a document without a
//! scalar uid, and files that cannot be read.

use std::fmt;
use std::path::PathBuf;

/// Error building a `SearchIndex`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The document at `position` lacks the uid field, or holds `null`, a
    /// list or an object there instead of a scalar.
    MissingUid { position: usize, field: String },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::MissingUid { position, field } => {
                write!(
                    f,
                    "document {} has no scalar uid field '{}'",
                    position, field
                )
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// Error reading posts or configuration from disk.
#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        what: &'static str,
        source: serde_json::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Json { what, source } => {
                write!(f, "invalid {} JSON: {}", what, source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Json { source, .. } => Some(source),
        }
    }
}
