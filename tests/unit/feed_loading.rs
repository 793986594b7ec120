//! Loading article files from disk.

use feedsift::{build_index, load_articles, LoadError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_json(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_search() {
    let file = write_json(
        r#"[
            {
                "title": "Tokio 1.40 released",
                "link": "https://tokio.rs/blog/1-40",
                "pubDate": "2024-09-01T12:00:00Z",
                "sourceTitle": "Tokio Blog",
                "description": "Async runtime improvements",
                "categories": ["Rust", "Async"]
            },
            {
                "title": "Why we moved to Postgres",
                "link": "https://eng.example/postgres",
                "pubDate": "2024-08-15T09:30:00+02:00",
                "sourceTitle": "Engineering"
            }
        ]"#,
    );

    let articles = load_articles(file.path()).unwrap();
    assert_eq!(articles.len(), 2);
    assert!(articles[1].categories.is_empty());
    assert!(articles[1].description.is_none());
    // Offsets are normalized to UTC
    assert_eq!(articles[1].pub_date.to_rfc3339(), "2024-08-15T07:30:00+00:00");

    let index = build_index(articles);
    let results = index.search("tokyo", &Default::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "https://tokio.rs/blog/1-40-0");
}

#[test]
fn test_empty_array() {
    let file = write_json("[]");
    let articles = load_articles(file.path()).unwrap();
    assert!(articles.is_empty());
    assert!(build_index(articles).is_empty());
}

#[test]
fn test_invalid_date_is_rejected() {
    let file = write_json(
        r#"[{"title": "T", "link": "L", "pubDate": "yesterday", "sourceTitle": "S"}]"#,
    );
    let err = load_articles(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
}

#[test]
fn test_unknown_article_keys_ignored() {
    let file = write_json(
        r#"[{"title": "T", "link": "L", "pubDate": "2024-01-01T00:00:00Z",
             "sourceTitle": "S", "guid": "abc", "enclosure": {"url": "x"}}]"#,
    );
    assert_eq!(load_articles(file.path()).unwrap().len(), 1);
}

#[test]
fn test_io_error_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("articles.json");
    let err = load_articles(&missing).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("articles.json"));
    assert!(std::error::Error::source(&err).is_some());
}
