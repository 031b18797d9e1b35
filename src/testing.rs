// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! Always compiled but hidden from documentation, so integration tests,
//! benches and fuzz targets build posts the same way.

#![doc(hidden)]

use crate::load::parse_posts;
use crate::types::Document;

/// A post with `id`, `postTitle` and `body`.
pub fn make_post(id: &str, title: &str, body: &str) -> Document {
    Document::new()
        .with_field("id", id)
        .with_field("postTitle", title)
        .with_field("body", body)
}

/// A post carrying every field the site configuration indexes.
pub fn make_full_post(id: &str, title: &str, body: &str, tags: &[&str]) -> Document {
    make_post(id, title, body)
        .with_field("slug", format!("/{}/", id))
        .with_field("categories", vec!["blog".to_string()])
        .with_field("tags", tags)
        .with_field("seoMetaDescription", format!("{} in brief", title))
        .with_field("featuredImageAlt", format!("Photo for {}", title))
}

/// The three camera and film posts in `data/fixtures/posts.json`.
pub fn blog_fixture() -> Vec<Document> {
    parse_posts(include_str!("../data/fixtures/posts.json")).unwrap_or_default()
}
