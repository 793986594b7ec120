//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Article;
use chrono::{DateTime, Utc};

/// 2024-01-01T00:00:00Z
const BASE_TIMESTAMP: i64 = 1_704_067_200;

/// Technical vocabulary for synthetic articles
pub const TECHNICAL_WORDS: &[&str] = &[
    "rust", "programming", "typescript", "javascript", "python", "golang", "kubernetes",
    "docker", "serverless", "microservices", "database", "postgresql", "redis", "mongodb",
    "graphql", "websocket", "authentication", "authorization", "encryption", "security",
    "performance", "optimization", "caching", "indexing", "algorithm", "structure", "binary",
    "react", "svelte", "angular", "webassembly", "compiler", "runtime", "memory", "async",
    "concurrency", "testing", "deployment", "monitoring", "observability",
];

/// Filler vocabulary, mostly short enough to be dropped by the tokenizer
pub const GENERAL_WORDS: &[&str] = &[
    "the", "and", "for", "with", "how", "to", "why", "new", "guide", "tips", "release",
    "notes", "deep", "dive", "into", "using", "building", "modern", "fast", "simple",
    "application", "system", "approach", "pattern", "practice", "design", "architecture",
];

/// Feed names for synthetic sources
pub const SOURCES: &[&str] = &[
    "Tech Blog", "Dev Weekly", "Systems Digest", "Frontend Focus", "Cloud Native News",
    "Hacker Roundup", "Database Daily",
];

fn timestamp(offset_hours: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(BASE_TIMESTAMP + offset_hours * 3600, 0).unwrap_or_default()
}

/// Create a bare article: title and link only, empty source.
pub fn make_article(title: &str, link: &str) -> Article {
    Article {
        title: title.to_string(),
        link: link.to_string(),
        pub_date: timestamp(0),
        source_title: String::new(),
        description: None,
        categories: Vec::new(),
        author: None,
    }
}

/// Create an article with every searchable field filled in.
pub fn make_full_article(
    title: &str,
    description: &str,
    categories: &[&str],
    source_title: &str,
) -> Article {
    let slug: String = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    Article {
        title: title.to_string(),
        link: format!("https://example.com/posts/{}", slug),
        pub_date: timestamp(0),
        source_title: source_title.to_string(),
        description: Some(description.to_string()),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        author: None,
    }
}

fn generate_content(word_count: usize, seed: usize) -> String {
    let all_words: Vec<&str> = TECHNICAL_WORDS
        .iter()
        .chain(GENERAL_WORDS.iter())
        .copied()
        .collect();

    (0..word_count)
        .map(|i| all_words[(seed * 7 + i * 3) % all_words.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deterministic corpus of `count` articles with realistic field sizes.
pub fn synthetic_articles(count: usize) -> Vec<Article> {
    (0..count)
        .map(|i| {
            let tech = |k: usize| TECHNICAL_WORDS[(i + k) % TECHNICAL_WORDS.len()];
            Article {
                title: format!("Building {} {} with {} #{}", tech(0), tech(1), tech(5), i),
                link: format!("https://example.com/posts/{:02}/post-{}", (i % 12) + 1, i),
                pub_date: timestamp(i as i64),
                source_title: SOURCES[i % SOURCES.len()].to_string(),
                description: (i % 10 != 0).then(|| generate_content(40, i)),
                categories: vec![tech(3).to_string(), tech(11).to_string()],
                author: (i % 3 == 0).then(|| format!("Author {}", i % 17)),
            }
        })
        .collect()
}
