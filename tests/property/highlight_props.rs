//! Highlighter properties over random text.

use proptest::prelude::*;
use stemlight::highlight::split_words;
use stemlight::{
    first_highlight_offset, highlight_text, render_highlighted, similar_words, Span,
};

fn joined(spans: &[Span]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}

/// Prose-like text with punctuation and mixed case.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex("[A-Za-z]{1,9}[.,!?' ]{0,2}").unwrap(),
        0..20,
    )
    .prop_map(|words| words.join(" "))
}

/// Anything printable, including regex metacharacters and non-ASCII.
fn wild_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("\\PC{0,40}").unwrap()
}

proptest! {
    #[test]
    fn prop_spans_reconstruct_text(text in text_strategy(), term in text_strategy()) {
        let spans = highlight_text(&term, &text, true);
        prop_assert_eq!(joined(&spans), text);
        prop_assert!(spans.iter().all(|span| !span.text.is_empty()));
    }

    #[test]
    fn prop_spans_reconstruct_wild_text(
        text in wild_strategy(),
        targets in prop::collection::vec(wild_strategy(), 0..4),
        term in wild_strategy(),
        case_insensitive in any::<bool>(),
    ) {
        let spans = render_highlighted(&text, &targets, &term, case_insensitive);
        prop_assert_eq!(joined(&spans), text);
        prop_assert!(spans.iter().all(|span| !span.text.is_empty()));
    }

    #[test]
    fn prop_rerender_is_equivalent(text in text_strategy(), term in text_strategy()) {
        let first = highlight_text(&term, &text, true);
        let again = highlight_text(&term, &joined(&first), true);
        prop_assert_eq!(first, again);
    }

    #[test]
    fn prop_similar_words_sorted_and_distinct(text in text_strategy(), term in text_strategy()) {
        let words = similar_words(&term, &text);
        let mut seen = std::collections::HashSet::new();
        for word in words.iter() {
            prop_assert!(!word.is_empty());
            prop_assert!(seen.insert(word.clone()));
        }
        for pair in words.windows(2) {
            prop_assert!(pair[0].chars().count() >= pair[1].chars().count());
        }
    }

    #[test]
    fn prop_similar_words_come_from_text_or_term(text in text_strategy(), term in text_strategy()) {
        let words = similar_words(&term, &text);
        let text_words: Vec<String> = split_words(&text).map(str::to_lowercase).collect();
        let term_words: Vec<&str> = split_words(&term).collect();
        for word in words.iter() {
            prop_assert!(
                text_words.contains(word) || term_words.contains(&word.as_str()),
                "{:?} is neither a text word nor a term word", word
            );
        }
    }

    #[test]
    fn prop_empty_term_has_no_similar_words(text in text_strategy()) {
        prop_assert!(similar_words("", &text).is_empty());
    }

    #[test]
    fn prop_first_offset_starts_a_highlight(text in text_strategy(), term in text_strategy()) {
        let spans = highlight_text(&term, &text, true);
        if let Some(offset) = first_highlight_offset(&spans) {
            let first = spans.iter().find(|span| span.highlighted).unwrap();
            prop_assert!(text[offset..].starts_with(first.text.as_str()));
        }
    }
}
