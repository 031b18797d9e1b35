// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalisation applied before tokenizing, to field text and queries alike.

use crate::config::SanitizerKind;

pub trait Sanitizer: Send + Sync {
    fn sanitize(&self, text: &str) -> String;
}

/// Leaves case alone; only trims surrounding whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseSensitiveSanitizer;

impl Sanitizer for CaseSensitiveSanitizer {
    fn sanitize(&self, text: &str) -> String {
        text.trim().to_string()
    }
}

/// Lower-cases, then trims.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCaseSanitizer;

impl Sanitizer for LowerCaseSanitizer {
    fn sanitize(&self, text: &str) -> String {
        text.to_lowercase().trim().to_string()
    }
}

impl SanitizerKind {
    pub fn sanitizer(self) -> Box<dyn Sanitizer> {
        match self {
            SanitizerKind::CaseSensitive => Box::new(CaseSensitiveSanitizer),
            SanitizerKind::LowerCase => Box::new(LowerCaseSanitizer),
        }
    }
}
