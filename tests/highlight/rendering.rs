//! Span rendering from similar words.

use super::common::blog_fixture;
use stemlight::{
    first_highlight_offset, highlight_text, highlighted_words, render_highlighted,
    similar_words, Span,
};

fn joined(spans: &[Span]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}

#[test]
fn test_cats_example() {
    let spans = render_highlighted("the cats sat", &["cats"], "cat", true);
    assert_eq!(
        spans,
        vec![
            Span::plain("the "),
            Span::marked("cats"),
            Span::plain(" sat")
        ]
    );
}

#[test]
fn test_longer_target_first_covers_whole_word() {
    let spans = render_highlighted("cats and one cat", &["cats", "cat"], "cat", true);
    assert_eq!(highlighted_words(&spans), vec!["cats", "cat"]);
    assert!(!spans.iter().any(|span| span.text == "s"));
}

#[test]
fn test_case_insensitive_marks_original_case() {
    let text = "Folding cameras are compact. FOLDING!";
    let spans = render_highlighted(text, &["folding"], "fold", true);
    assert_eq!(highlighted_words(&spans), vec!["Folding", "FOLDING"]);
    assert_eq!(joined(&spans), text);
}

#[test]
fn test_case_sensitive_skips_other_case() {
    let spans = render_highlighted("Film and film", &["film"], "film", false);
    assert_eq!(highlighted_words(&spans), vec!["film"]);
}

#[test]
fn test_every_match_is_highlighted() {
    // long s and the kelvin sign case-fold onto ascii letters
    for (text, target) in [("ſun and sun", "sun"), ("\u{212A}m or km", "km")] {
        let spans = render_highlighted(text, &[target], target, true);
        let marked = highlighted_words(&spans);
        assert_eq!(marked.len(), 2, "{text}: {marked:?}");
        assert_eq!(joined(&spans), text);
    }
}

#[test]
fn test_fallback_to_search_term() {
    let targets: Vec<String> = Vec::new();
    let spans = render_highlighted("Slow film gives fine grain", &targets, "grain", true);
    assert_eq!(highlighted_words(&spans), vec!["grain"]);
}

#[test]
fn test_no_targets_no_term() {
    let targets: Vec<String> = Vec::new();
    assert_eq!(
        render_highlighted("Slow film", &targets, "  ", true),
        vec![Span::plain("Slow film")]
    );
}

#[test]
fn test_empty_text() {
    assert!(render_highlighted("", &["film"], "film", true).is_empty());
}

#[test]
fn test_whole_text_is_a_match() {
    let spans = render_highlighted("film", &["film"], "film", true);
    assert_eq!(spans, vec![Span::marked("film")]);
}

#[test]
fn test_special_characters_in_targets() {
    let text = "Shot on f/2.8 (wide open) at 1/250s.";
    let spans = render_highlighted(text, &["f/2.8", "(wide"], "f/2.8", true);
    assert_eq!(highlighted_words(&spans), vec!["f/2.8", "(wide"]);
    assert_eq!(joined(&spans), text);
}

#[test]
fn test_similar_words_feed_renderer() {
    let posts = blog_fixture();
    let body = posts[2].text("body");
    let words = similar_words("films", &body);
    let spans = render_highlighted(&body, &words, "films", true);
    assert_eq!(highlighted_words(&spans), vec!["film", "films", "film"]);
    assert_eq!(joined(&spans), body);
}

#[test]
fn test_rerender_of_output_is_equivalent() {
    let posts = blog_fixture();
    let text = posts[0].text("seoMetaDescription");
    let first = highlight_text("cameras", &text, true);
    let again = highlight_text("cameras", &joined(&first), true);
    assert_eq!(first, again);
}

#[test]
fn test_first_highlight_offset_points_at_match() {
    let text = "Choosing film is personal.";
    let spans = highlight_text("film", text, true);
    let offset = first_highlight_offset(&spans).unwrap();
    assert_eq!(&text[offset..offset + 4], "film");
    assert_eq!(first_highlight_offset(&highlight_text("xyzzy", text, true)), None);
}
