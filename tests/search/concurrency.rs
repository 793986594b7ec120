//! Sharing one index between threads, and rebuilding under readers.

use super::common::{make_article, synthetic_articles};
use feedsift::{build_index, search, SearchIndex, SearchOptions};
use std::sync::Arc;
use std::thread;

#[test]
fn index_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SearchIndex>();
}

#[test]
fn concurrent_readers_see_the_same_results() {
    let index = Arc::new(build_index(synthetic_articles(500)));
    let options = SearchOptions::default();
    let expected: Vec<String> = search(&index, "docker deployment", &options)
        .iter()
        .map(|r| r.id.to_string())
        .collect();

    thread::scope(|scope| {
        for _ in 0..8 {
            let index = Arc::clone(&index);
            let expected = &expected;
            scope.spawn(move || {
                let ids: Vec<String> = search(&index, "docker deployment", &options)
                    .iter()
                    .map(|r| r.id.to_string())
                    .collect();
                assert_eq!(&ids, expected);
            });
        }
    });
}

#[test]
fn rebuilding_leaves_the_old_snapshot_intact() {
    let original = vec![make_article("Rust weekly digest", "https://x.example/rust")];
    let old = build_index(original.clone());
    let held = search(&old, "rust", &SearchOptions::default());

    let mut changed = original;
    changed.insert(0, make_article("Rust compiler news", "https://x.example/compiler"));
    let new = build_index(changed);

    // the old index and its results are untouched
    assert_eq!(old.len(), 1);
    assert_eq!(held[0].id, "https://x.example/rust-0");
    assert_eq!(search(&old, "rust", &SearchOptions::default()).len(), 1);

    // identifiers shift in the new snapshot
    assert_eq!(new.len(), 2);
    assert!(new.get("https://x.example/rust-1").is_some());
    assert_ne!(old.checksum(), new.checksum());
}
