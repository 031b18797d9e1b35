//! Index strategy semantics: exact word, prefix and all substrings.

use super::common::{build, camera_posts, fixture_index, sorted_uids, SITE_CONFIG};
use stemlight::{IndexConfiguration, IndexStrategyKind};

fn with_strategy(kind: IndexStrategyKind) -> IndexConfiguration {
    IndexConfiguration::default().with_strategy(kind)
}

#[test]
fn test_exact_requires_whole_token() {
    let index = build(camera_posts(), with_strategy(IndexStrategyKind::ExactWord));
    assert!(index.query("cam").is_empty());
    assert_eq!(sorted_uids(&index, "camera"), vec!["a", "c"]);
}

#[test]
fn test_prefix_matches_token_starts() {
    let index = build(camera_posts(), with_strategy(IndexStrategyKind::Prefix));
    assert_eq!(sorted_uids(&index, "cam"), vec!["a", "c"]);
    assert_eq!(sorted_uids(&index, "c"), vec!["a", "c"]);
    assert!(index.query("amera").is_empty());
}

#[test]
fn test_all_substrings_matches_inside_tokens() {
    let index = build(camera_posts(), with_strategy(IndexStrategyKind::AllSubstrings));
    assert_eq!(sorted_uids(&index, "amer"), vec!["a", "c"]);
    assert_eq!(sorted_uids(&index, "ellow"), vec!["a"]);
}

#[test]
fn test_strategies_are_nested() {
    // every exact hit is a prefix hit, every prefix hit a substring hit
    let exact = build(camera_posts(), with_strategy(IndexStrategyKind::ExactWord));
    let prefix = build(camera_posts(), with_strategy(IndexStrategyKind::Prefix));
    let all = build(camera_posts(), with_strategy(IndexStrategyKind::AllSubstrings));
    for query in ["film", "fil", "lens", "len", "ens", "camera bag", "grain"] {
        let e = sorted_uids(&exact, query);
        let p = sorted_uids(&prefix, query);
        let s = sorted_uids(&all, query);
        assert!(e.iter().all(|uid| p.contains(uid)), "{query}: {e:?} ⊄ {p:?}");
        assert!(p.iter().all(|uid| s.contains(uid)), "{query}: {p:?} ⊄ {s:?}");
    }
}

#[test]
fn test_site_prefix_search() {
    let index = fixture_index();
    assert_eq!(SITE_CONFIG.index_strategy, IndexStrategyKind::Prefix);
    // "photography" and "photographers" both start with "photo"
    assert_eq!(sorted_uids(&index, "photo"), vec!["post-film", "post-folding"]);
}

#[test]
fn test_vocabulary_grows_with_strategy() {
    let exact = build(camera_posts(), with_strategy(IndexStrategyKind::ExactWord));
    let prefix = build(camera_posts(), with_strategy(IndexStrategyKind::Prefix));
    let all = build(camera_posts(), with_strategy(IndexStrategyKind::AllSubstrings));
    assert!(exact.stats().vocabulary < prefix.stats().vocabulary);
    assert!(prefix.stats().vocabulary < all.stats().vocabulary);
}
