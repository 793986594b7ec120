// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant, field-weighted search over feed articles.
//!
//! Build an in-memory index over an ordered article collection, then answer
//! free-text queries with ranked results that say which fields matched.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ tokenize.rs │────▶│  index/      │────▶│  search/     │
//! │ (tokenize)  │     │ (build_index,│     │  (search,    │
//! │             │     │  FieldIndex) │     │   pruning)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!        ┌──────────────┬─────────────────────────┤
//!        ▼              ▼                         ▼
//! ┌─────────────┐ ┌─────────────┐          ┌──────────────┐
//! │  fuzzy/     │ │ scoring/    │          │ highlight.rs │
//! │ (similarity)│ │ (weights)   │          │ (<mark>)     │
//! └─────────────┘ └─────────────┘          └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use feedsift::{build_index, highlight, search, SearchOptions};
//! use feedsift::testing::make_full_article;
//!
//! let articles = vec![
//!     make_full_article("React Performance Tips", "Learn how to optimize React", &["React"], "Tech Blog"),
//!     make_full_article("Vue vs React", "A comparison", &["Vue", "React"], "Dev Weekly"),
//! ];
//! let index = build_index(articles);
//!
//! let results = search(&index, "reakt", &SearchOptions::default());
//! assert_eq!(results.len(), 2);
//! assert_eq!(highlight(&results[0].article.title, "react"), "<mark>React</mark> Performance Tips");
//! ```
//!
//! The index is a snapshot: nothing mutates it after [`build_index`], so it can
//! be shared between threads freely. A changed article collection means a new
//! index.

pub mod feed;
pub mod fuzzy;
pub mod highlight;
pub mod index;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod tokenize;
mod types;

// Re-exports for public API
pub use feed::{load_articles, parse_articles, LoadError};
pub use fuzzy::{levenshtein, similarity, SUBSTRING_SIMILARITY};
pub use highlight::{highlight, highlight_with, Marker};
#[cfg(feature = "parallel")]
pub use index::build_index_parallel;
pub use index::{build_index, FieldIndex, FieldStats, IndexStats, SearchIndex, Term};
pub use scoring::{
    field_weight, CATEGORY_WEIGHT, CONTENT_WEIGHT, SOURCE_WEIGHT, TITLE_WEIGHT,
};
pub use search::candidates::{LengthWindow, MAX_FUZZY_CANDIDATES};
pub use search::search;
pub use tokenize::{tokenize, MIN_TOKEN_LEN};
pub use types::{
    article_id, Article, DocId, Field, FieldSet, SearchOptions, SearchResult,
    DEFAULT_FUZZY_THRESHOLD,
};
