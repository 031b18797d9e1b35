//! TF-IDF ranking and unordered mode.

use super::common::{build, camera_posts, fixture_index, make_post, uids, SITE_CONFIG};
use stemlight::IndexConfiguration;

#[test]
fn test_more_occurrences_rank_higher() {
    let index = fixture_index();
    assert_eq!(uids(&index, "film"), vec!["post-film", "post-tlr", "post-folding"]);
}

#[test]
fn test_scores_descend() {
    let index = fixture_index();
    let hits = index.query_scored("camera");
    assert!(!hits.is_empty());
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_single_token_score_value() {
    let index = build(camera_posts(), IndexConfiguration::default());
    // "grain" occurs once, in one of four posts
    let hits = index.query_scored("grain");
    assert_eq!(hits.len(), 1);
    let expected = 1.0 + (4.0f64 / 2.0).ln();
    assert!((hits[0].score.unwrap() - expected).abs() < 1e-9);
}

#[test]
fn test_multi_token_scores_add() {
    let index = build(camera_posts(), IndexConfiguration::default());
    let grain = index.query_scored("grain")[0].score.unwrap();
    let slow = index.query_scored("slow")[0].score.unwrap();
    let both = index.query_scored("slow grain")[0].score.unwrap();
    assert!((both - (grain + slow)).abs() < 1e-9);
}

#[test]
fn test_ties_keep_insertion_order() {
    let docs = vec![
        make_post("x", "Lens", "lens"),
        make_post("y", "Lens", "lens"),
        make_post("z", "Lens", "lens"),
    ];
    let index = build(docs, IndexConfiguration::default());
    assert_eq!(uids(&index, "lens"), vec!["x", "y", "z"]);

    let docs = vec![
        make_post("z", "Lens", "lens"),
        make_post("y", "Lens", "lens"),
        make_post("x", "Lens", "lens"),
    ];
    let index = build(docs, IndexConfiguration::default());
    assert_eq!(uids(&index, "lens"), vec!["z", "y", "x"]);
}

#[test]
fn test_unordered_uses_insertion_order() {
    let config = SITE_CONFIG.clone().with_term_frequency(false);
    let index = build(stemlight::testing::blog_fixture(), config);
    let hits = index.query_scored("film");
    assert_eq!(
        hits.iter().map(|hit| hit.uid).collect::<Vec<_>>(),
        vec!["post-folding", "post-tlr", "post-film"]
    );
    assert!(hits.iter().all(|hit| hit.score.is_none()));
}

#[test]
fn test_ranking_does_not_change_the_match_set() {
    let ranked = fixture_index();
    let unordered = build(
        stemlight::testing::blog_fixture(),
        SITE_CONFIG.clone().with_term_frequency(false),
    );
    for query in ["film", "camera", "lens", "medium", "street grain"] {
        let mut a = uids(&ranked, query);
        let mut b = uids(&unordered, query);
        a.sort();
        b.sort();
        assert_eq!(a, b, "{query}");
    }
}
