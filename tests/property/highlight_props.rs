//! Highlighter invariants.

use feedsift::highlight;
use proptest::prelude::*;

/// Query terms built from letters that never occur in `<mark>` markup.
fn safe_terms() -> impl Strategy<Value = String> {
    prop::collection::vec("[b-jl-qs-z]{1,4}", 1..4).prop_map(|terms| terms.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Removing the markers gives back the original text.
    #[test]
    fn prop_strip_markers_restores_text(text in "[A-Za-z0-9 .,]{0,50}", query in safe_terms()) {
        let marked = highlight(&text, &query);
        let stripped = marked.replace("<mark>", "").replace("</mark>", "");
        prop_assert_eq!(stripped, text);
    }

    /// Terms that never occur leave the text untouched.
    #[test]
    fn prop_no_match_unchanged(text in "[0-9 .,]{0,50}", query in "[a-z]{1,6}") {
        prop_assert_eq!(highlight(&text, &query), text);
    }

    /// Blank queries leave the text untouched.
    #[test]
    fn prop_blank_query_unchanged(text in "\\PC{0,50}", query in "[ \t]{0,4}") {
        prop_assert_eq!(highlight(&text, &query), text);
    }

    /// Every case-insensitive occurrence of a single term is wrapped.
    #[test]
    fn prop_every_occurrence_marked(text in "[bcdBCD ]{0,40}", term in "[bcd]{1,2}") {
        let marked = highlight(&text, &term);
        let expected = text.to_lowercase().matches(term.as_str()).count();
        prop_assert_eq!(marked.matches("<mark>").count(), expected);
    }

    /// Regex metacharacters in the query match literally.
    #[test]
    fn prop_metacharacters_literal(prefix in "[a-z ]{0,10}", meta in "[.*+?()|$^]{1,3}") {
        let text = format!("{}{}", prefix, meta);
        let marked = highlight(&text, &meta);
        let wrapped = format!("<mark>{}</mark>", meta);
        prop_assert!(marked.contains(&wrapped));
    }
}
