//! Sanitiser, stop words and stemming as seen through queries.

use super::common::{build, camera_posts, fixture_index, make_post, sorted_uids, uids, SITE_CONFIG};
use stemlight::{IndexConfiguration, IndexStrategyKind, SanitizerKind};

#[test]
fn test_query_and_index_share_pipeline() {
    let index = fixture_index();
    assert_eq!(index.analyze("The Folding Cameras"), vec!["fold", "camera"]);
    assert_eq!(sorted_uids(&index, "CAMERAS"), vec!["post-folding", "post-tlr"]);
}

#[test]
fn test_stop_word_removed_before_stemming() {
    let index = fixture_index();
    // "was" would stem to the non-stop-word "wa"; it is dropped first
    assert!(index.query("was").is_empty());
    assert_eq!(index.analyze("was"), Vec::<String>::new());
}

#[test]
fn test_stemmed_stop_word_survives() {
    let index = fixture_index();
    // "others" is not a stop word and is indexed as "other"
    assert_eq!(uids(&index, "others"), vec!["post-folding"]);
    // while "other" itself is one
    assert!(index.query("other").is_empty());
}

#[test]
fn test_stop_words_can_be_kept() {
    let docs = vec![make_post("a", "The Camera", "the best camera")];
    let on = build(docs.clone(), IndexConfiguration::default());
    assert!(on.query("the").is_empty());

    let off = build(docs, IndexConfiguration::default().with_stop_words(false));
    assert_eq!(uids(&off, "the"), vec!["a"]);
}

#[test]
fn test_stemming_can_be_disabled() {
    let exact = IndexConfiguration::default().with_strategy(IndexStrategyKind::ExactWord);

    let stemmed = build(camera_posts(), exact.clone());
    assert_eq!(sorted_uids(&stemmed, "cameras"), vec!["a", "c"]);

    let raw = build(camera_posts(), exact.with_stemming(false));
    assert!(raw.query("cameras").is_empty());
    assert_eq!(sorted_uids(&raw, "camera"), vec!["a", "c"]);
}

#[test]
fn test_case_sensitive_without_stemming() {
    let config = SITE_CONFIG
        .clone()
        .with_sanitiser(SanitizerKind::CaseSensitive)
        .with_stemming(false);
    let index = build(stemlight::testing::blog_fixture(), config);
    assert_eq!(uids(&index, "Choosing"), vec!["post-film"]);
    assert!(index.query("choosing").is_empty());
}

#[test]
fn test_case_sensitive_stemming_still_folds_case() {
    let config = SITE_CONFIG
        .clone()
        .with_sanitiser(SanitizerKind::CaseSensitive);
    let index = build(stemlight::testing::blog_fixture(), config);
    assert_eq!(uids(&index, "choosing"), vec!["post-film"]);
}

#[test]
fn test_any_field_matches() {
    let index = fixture_index();
    // only in featuredImageAlt
    assert_eq!(uids(&index, "wooden"), vec!["post-tlr"]);
    // only in tags
    assert_eq!(uids(&index, "tlr"), vec!["post-tlr"]);
    // title, tags and description of one post
    assert_eq!(uids(&index, "street"), vec!["post-film"]);
}

#[test]
fn test_tokens_may_match_different_fields() {
    let index = fixture_index();
    // "wooden" is in the alt text, "viewfinder" in the body
    assert_eq!(uids(&index, "wooden viewfinder"), vec!["post-tlr"]);
}

#[test]
fn test_unindexed_fields_are_ignored() {
    let config = IndexConfiguration::default().with_index_by(["postTitle"]);
    let index = build(camera_posts(), config);
    assert!(index.query("bellows").is_empty());
    assert_eq!(uids(&index, "leica"), vec!["c"]);
}
