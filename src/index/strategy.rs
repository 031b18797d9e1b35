// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index-time token expansion.
//!
//! Matching is decided at build time: a prefix index stores every prefix of
//! every token, so looking up the query token verbatim is a prefix match.
//! The query side never changes.
//!
//! | Strategy        | "film" expands to                              |
//! |-----------------|------------------------------------------------|
//! | exact word      | film                                           |
//! | prefix          | f, fi, fil, film                               |
//! | all substrings  | f, fi, fil, film, i, il, ilm, l, lm, m         |

use crate::config::IndexStrategyKind;

pub trait IndexStrategy: Send + Sync {
    /// Every key under which `token` is stored.
    fn expand_token(&self, token: &str) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExactWordIndexStrategy;

impl IndexStrategy for ExactWordIndexStrategy {
    fn expand_token(&self, token: &str) -> Vec<String> {
        if token.is_empty() {
            Vec::new()
        } else {
            vec![token.to_string()]
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixIndexStrategy;

impl IndexStrategy for PrefixIndexStrategy {
    fn expand_token(&self, token: &str) -> Vec<String> {
        token
            .char_indices()
            .map(|(i, c)| token[..i + c.len_utf8()].to_string())
            .collect()
    }
}

/// Every substring, once per (start, end) position. Repeats are kept so that
/// term frequencies count occurrences.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllSubstringsIndexStrategy;

impl IndexStrategy for AllSubstringsIndexStrategy {
    fn expand_token(&self, token: &str) -> Vec<String> {
        let mut expanded = Vec::new();
        for (start, _) in token.char_indices() {
            let tail = &token[start..];
            for (i, c) in tail.char_indices() {
                expanded.push(tail[..i + c.len_utf8()].to_string());
            }
        }
        expanded
    }
}

impl IndexStrategyKind {
    pub fn strategy(self) -> Box<dyn IndexStrategy> {
        match self {
            IndexStrategyKind::AllSubstrings => Box::new(AllSubstringsIndexStrategy),
            IndexStrategyKind::ExactWord => Box::new(ExactWordIndexStrategy),
            IndexStrategyKind::Prefix => Box::new(PrefixIndexStrategy),
        }
    }
}
