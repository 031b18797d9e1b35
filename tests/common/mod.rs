//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::LazyLock;
use stemlight::{Document, IndexConfiguration, SearchIndex};

// Re-export canonical test utilities from stemlight::testing
pub use stemlight::testing::{blog_fixture, make_full_post, make_post};

/// The sample site configuration shipped in `config/search.json`.
pub static SITE_CONFIG: LazyLock<IndexConfiguration> = LazyLock::new(|| {
    stemlight::parse_config(include_str!("../../config/search.json"))
        .expect("config/search.json parses")
});

/// Index over the fixture posts with the site configuration.
pub fn fixture_index() -> SearchIndex {
    SearchIndex::build(blog_fixture(), SITE_CONFIG.clone()).expect("fixture posts have uids")
}

/// Index over `docs` with `config`, panicking on a missing uid.
pub fn build(docs: Vec<Document>, config: IndexConfiguration) -> SearchIndex {
    SearchIndex::build(docs, config).expect("test documents have uids")
}

/// Uids of the hits for `query`, in result order.
pub fn uids(index: &SearchIndex, query: &str) -> Vec<String> {
    index
        .query_scored(query)
        .into_iter()
        .map(|hit| hit.uid.to_string())
        .collect()
}

/// Uids sorted, for order-insensitive comparisons.
pub fn sorted_uids(index: &SearchIndex, query: &str) -> Vec<String> {
    let mut found = uids(index, query);
    found.sort();
    found
}

/// A small camera blog used across the search tests.
pub fn camera_posts() -> Vec<Document> {
    vec![
        make_post("a", "Folding Camera", "A folding camera with bellows."),
        make_post("b", "Best Film", "Slow film, fine grain. Film again."),
        make_post("c", "Leica Lenses", "Rangefinder lenses and a camera bag."),
        make_post("d", "Darkroom Notes", "Developing film at home."),
    ]
}
