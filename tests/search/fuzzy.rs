//! Fuzzy fallback: thresholds, pruning, and exact-match precedence.

use super::common::{assert_close, build_title_index, make_article};
use feedsift::{build_index, search, SearchOptions, MAX_FUZZY_CANDIDATES, SUBSTRING_SIMILARITY};

#[test]
fn exact_match_takes_precedence_over_fuzzy() {
    // "postgres" would score SUBSTRING_SIMILARITY against "postgresql"
    let index = build_title_index(&["postgres tuning", "postgresql internals"]);
    let results = search(&index, "postgres", &SearchOptions::default());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].article.title, "postgres tuning");
    assert_close(results[0].score, 3.0);
}

#[test]
fn exact_precedence_is_per_field() {
    // exact in title for one article, fuzzy-only in content for another
    let title_hit = make_article("postgres tuning", "https://x.example/a");
    let mut content_hit = make_article("Databases", "https://x.example/b");
    content_hit.description = Some("postgresql internals".to_string());

    let index = build_index(vec![title_hit, content_hit]);
    let results = search(&index, "postgres", &SearchOptions::default());

    assert_eq!(results.len(), 2);
    assert_close(results[0].score, 3.0);
    assert_close(results[1].score, SUBSTRING_SIMILARITY * 1.0);
}

#[test]
fn substring_candidates_score_fixed_bonus() {
    let index = build_title_index(&["typescripts everywhere"]);
    let results = search(&index, "typescript", &SearchOptions::default());
    assert_close(results[0].score, SUBSTRING_SIMILARITY * 3.0);
}

#[test]
fn typo_in_first_letter_is_not_found() {
    let index = build_title_index(&["kubernetes operators"]);
    assert!(search(&index, "cubernetes", &SearchOptions::default()).is_empty());
    assert_eq!(search(&index, "kubernetis", &SearchOptions::default()).len(), 1);
}

#[test]
fn candidates_outside_length_window_are_skipped() {
    // "rea" is a substring of "reactivity" but far too short a query for it
    let index = build_title_index(&["reactivity explained"]);
    let options = SearchOptions::default().with_fuzzy_threshold(0.0);
    assert!(search(&index, "rea", &options).is_empty());
}

#[test]
fn candidate_cap_limits_fuzzy_reach() {
    // 60 same-length tokens starting with 'm', the real match last
    let mut titles: Vec<String> = (0..60).map(|i| format!("m{:05}x", i)).collect();
    titles.push("monitor".to_string());
    let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    let index = build_title_index(&refs);

    let results = search(&index, "monitr", &SearchOptions::default());
    assert!(
        results.iter().all(|r| r.article.title != "monitor"),
        "candidate {} should be beyond the cap of {}",
        titles.len() - 1,
        MAX_FUZZY_CANDIDATES
    );

    // with fewer decoys in front it is reached
    let index = build_title_index(&["m00001x", "monitor"]);
    let results = search(&index, "monitr", &SearchOptions::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].article.title, "monitor");
}

#[test]
fn lowering_threshold_never_loses_results() {
    let index = build_title_index(&[
        "performance tuning",
        "performant code",
        "perform well",
        "permanent storage",
        "personal notes",
    ]);

    let mut previous = 0;
    for threshold in [1.0, 0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3, 0.2, 0.0] {
        let options = SearchOptions::default().with_fuzzy_threshold(threshold);
        let count = search(&index, "performence", &options).len();
        assert!(
            count >= previous,
            "threshold {} returned {} < {}",
            threshold,
            count,
            previous
        );
        previous = count;
    }
    assert!(previous > 0);
}

#[test]
fn fuzzy_contributions_sum_across_candidates() {
    // "reacts" (substring, 0.9) and "reach" (1 - 1/5 = 0.8) both clear 0.6
    let index = build_title_index(&["reacts reach"]);
    let results = search(&index, "react", &SearchOptions::default());
    assert_close(results[0].score, (0.9 + 0.8) * 3.0);
}
