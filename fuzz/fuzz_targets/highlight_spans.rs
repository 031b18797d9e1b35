// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for span rendering.
//!
//! Targets are raw user-controlled strings, so regex metacharacters and
//! broken Unicode must come through without a panic or a lost byte.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stemlight::{first_highlight_offset, render_highlighted};

#[derive(Debug, Arbitrary)]
struct RenderInput {
    text: String,
    targets: Vec<String>,
    term: String,
    case_insensitive: bool,
}

fuzz_target!(|input: RenderInput| {
    let text: String = input.text.chars().take(500).collect();
    let targets: Vec<String> = input
        .targets
        .into_iter()
        .take(8)
        .map(|target| target.chars().take(30).collect())
        .collect();

    let spans = render_highlighted(&text, &targets, &input.term, input.case_insensitive);

    // INVARIANT 1: spans concatenate back to the text
    let joined: String = spans.iter().map(|span| span.text.as_str()).collect();
    assert_eq!(joined, text);

    // INVARIANT 2: no empty fragments
    assert!(spans.iter().all(|span| !span.text.is_empty()));

    // INVARIANT 3: the first highlight offset lands on a char boundary
    if let Some(offset) = first_highlight_offset(&spans) {
        assert!(text.is_char_boundary(offset));
    }
});
