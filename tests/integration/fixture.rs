//! The search page flow over the fixture blog: query, then highlight each hit.

use super::common::{fixture_index, uids, SITE_CONFIG};
use stemlight::{highlight_text, highlighted_words, IndexStrategyKind, SanitizerKind};

#[test]
fn test_site_configuration() {
    assert_eq!(SITE_CONFIG.index_strategy, IndexStrategyKind::Prefix);
    assert_eq!(SITE_CONFIG.search_sanitiser, SanitizerKind::LowerCase);
    assert_eq!(SITE_CONFIG.index_by.len(), 6);
    assert_eq!(SITE_CONFIG.uid_field, "id");
}

#[test]
fn test_fixture_index_stats() {
    let index = fixture_index();
    let stats = index.stats();
    assert_eq!(stats.documents, 3);
    assert_eq!(stats.skipped_duplicates, 0);
    assert!(stats.vocabulary > 0);
    assert!(stats.postings >= stats.vocabulary);
}

#[test]
fn test_search_then_highlight_summaries() {
    let index = fixture_index();
    let query = "cameras";
    let hits = index.query_scored(query);
    assert_eq!(hits.len(), 2);

    for hit in &hits {
        let description = hit.document.text("seoMetaDescription");
        let spans = highlight_text(query, &description, true);
        let marked = highlighted_words(&spans);
        assert!(!marked.is_empty(), "{} has no highlight", hit.uid);
        for word in marked {
            assert!(word.to_lowercase().starts_with("camera"), "{word}");
        }
    }
}

#[test]
fn test_typing_a_query_letter_by_letter() {
    let index = fixture_index();
    let mut previous: Option<Vec<String>> = None;
    for end in 1..="reflex".len() {
        let found = uids(&index, &"reflex"[..end]);
        if let Some(previous) = &previous {
            // a longer prefix never matches more posts
            assert!(found.iter().all(|uid| previous.contains(uid)));
        }
        previous = Some(found);
    }
    assert_eq!(previous.unwrap(), vec!["post-tlr"]);
}

#[test]
fn test_lookup_by_uid() {
    let index = fixture_index();
    let post = index.document_by_uid("post-film").unwrap();
    assert_eq!(post.text("slug"), "/best-film/");
    assert!(index.document_by_uid("post-missing").is_none());
}

#[test]
fn test_document_frequency() {
    let index = fixture_index();
    assert_eq!(index.document_frequency("film"), 3);
    assert_eq!(index.document_frequency("lens"), 1);
}
