//! JSON shape of articles and search results.

use super::common::react_vue_index;
use feedsift::SearchOptions;
use serde_json::json;

#[test]
fn test_result_json_shape() {
    let index = react_vue_index();
    let results = index.search("vue", &SearchOptions::default());
    assert_eq!(results.len(), 1);

    let value = serde_json::to_value(&results[0]).unwrap();
    assert_eq!(value["id"], "https://example.com/posts/vue-vs-react-1");
    assert_eq!(value["score"], 5.0);
    assert_eq!(value["matchedFields"], json!(["title", "category"]));
    assert_eq!(value["article"]["title"], "Vue vs React");
    assert_eq!(value["article"]["sourceTitle"], "Dev Weekly");
    assert_eq!(value["article"]["pubDate"], "2024-01-01T00:00:00Z");
}

#[test]
fn test_absent_optionals_are_omitted() {
    let article = feedsift::testing::make_article("Bare", "https://x.example");
    let value = serde_json::to_value(&article).unwrap();
    assert!(value.get("description").is_none());
    assert!(value.get("categories").is_none());
    assert!(value.get("author").is_none());
}

#[test]
fn test_article_json_round_trip() {
    let article = feedsift::testing::make_full_article(
        "Round Trip",
        "There and back",
        &["Travel"],
        "Feed",
    );
    let json = serde_json::to_string(&article).unwrap();
    let back: feedsift::Article = serde_json::from_str(&json).unwrap();
    assert_eq!(back, article);
}
