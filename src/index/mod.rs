// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: one inverted index per searchable field.
//!
//! A [`SearchIndex`] is a snapshot. It is built once from an ordered article
//! collection and never changes afterwards. When the collection changes, build
//! a new one; anyone still holding the old one keeps a consistent view.
//!
//! Building is total: zero articles, articles with nothing but a two-letter
//! title, missing descriptions - all produce a valid index. An article whose
//! fields tokenize to nothing is stored but unreachable by any query.

mod field;

pub use field::{FieldIndex, Term};

use crate::tokenize::tokenize;
use crate::types::{article_id, Article, DocId, Field};
use chrono::{DateTime, Utc};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;
use tracing::debug;

/// Tokens of one article, split by field, in encounter order.
#[derive(Debug, Default)]
struct ArticleTokens {
    title: Vec<String>,
    content: Vec<String>,
    category: Vec<String>,
    source: Vec<String>,
}

impl ArticleTokens {
    fn from_article(article: &Article) -> Self {
        let content = match article.description.as_deref() {
            Some(description) if !description.is_empty() => tokenize(description),
            _ => Vec::new(),
        };

        Self {
            title: tokenize(&article.title),
            content,
            category: article
                .categories
                .iter()
                .flat_map(|category| tokenize(category))
                .collect(),
            source: tokenize(&article.source_title),
        }
    }
}

/// The searchable snapshot of an article collection.
///
/// Read-only once built, so it can be shared across threads (`&SearchIndex`
/// or `Arc<SearchIndex>`) without locking.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    articles: Vec<Article>,
    ids: Vec<String>,
    by_id: HashMap<String, DocId>,
    title: FieldIndex,
    content: FieldIndex,
    category: FieldIndex,
    source: FieldIndex,
    built_at: DateTime<Utc>,
    checksum: u32,
}

impl SearchIndex {
    /// Number of articles, reachable or not.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// `(identifier, article)` pairs in ordinal order.
    pub fn articles(&self) -> impl Iterator<Item = (&str, &Article)> {
        self.ids.iter().map(String::as_str).zip(self.articles.iter())
    }

    /// Look an article up by its `"<link>-<ordinal>"` identifier.
    pub fn get(&self, id: &str) -> Option<&Article> {
        self.by_id.get(id).map(|doc| &self.articles[doc.as_usize()])
    }

    pub fn article(&self, doc: DocId) -> Option<&Article> {
        self.articles.get(doc.as_usize())
    }

    pub fn article_id(&self, doc: DocId) -> Option<&str> {
        self.ids.get(doc.as_usize()).map(String::as_str)
    }

    /// The inverted index for one field.
    pub fn field(&self, field: Field) -> &FieldIndex {
        match field {
            Field::Title => &self.title,
            Field::Content => &self.content,
            Field::Category => &self.category,
            Field::Source => &self.source,
        }
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// CRC32 over the article identifiers, in order.
    ///
    /// Identifiers are positional, so this changes whenever the collection's
    /// membership or order does. Two builds over the same collection agree.
    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            articles: self.len(),
            fields: Field::ALL
                .into_iter()
                .map(|field| {
                    let index = self.field(field);
                    FieldStats {
                        field,
                        tokens: index.len(),
                        postings: index.total_postings(),
                    }
                })
                .collect(),
        }
    }
}

/// Size of one field's inverted index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldStats {
    pub field: Field,
    pub tokens: usize,
    pub postings: usize,
}

/// Summary counts for an index, mostly for `feedsift inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub articles: usize,
    pub fields: Vec<FieldStats>,
}

/// Build the index for `articles`, in order.
///
/// The ordinal of each article becomes part of its identifier, so the same
/// articles in a different order produce different identifiers.
pub fn build_index(articles: Vec<Article>) -> SearchIndex {
    let start = Instant::now();
    let tokens: Vec<ArticleTokens> = articles.iter().map(ArticleTokens::from_article).collect();
    let index = assemble(articles, tokens);
    log_built(&index, start, "sequential");
    index
}

/// Same result as [`build_index`], tokenizing articles on the rayon pool.
///
/// Tokenization is the only parallel step. Postings are merged in ordinal
/// order afterwards, so token order and posting order match the sequential
/// build exactly.
#[cfg(feature = "parallel")]
pub fn build_index_parallel(articles: Vec<Article>) -> SearchIndex {
    let start = Instant::now();
    let tokens: Vec<ArticleTokens> = articles
        .par_iter()
        .map(ArticleTokens::from_article)
        .collect();
    let index = assemble(articles, tokens);
    log_built(&index, start, "parallel");
    index
}

fn assemble(articles: Vec<Article>, tokens: Vec<ArticleTokens>) -> SearchIndex {
    let mut title = FieldIndex::new();
    let mut content = FieldIndex::new();
    let mut category = FieldIndex::new();
    let mut source = FieldIndex::new();

    let mut ids = Vec::with_capacity(articles.len());
    let mut by_id = HashMap::with_capacity(articles.len());
    let mut hasher = crc32fast::Hasher::new();

    for (ordinal, (article, article_tokens)) in articles.iter().zip(tokens).enumerate() {
        let doc = DocId(ordinal as u32);
        let id = article_id(&article.link, ordinal);

        hasher.update(id.as_bytes());
        hasher.update(b"\n");
        by_id.insert(id.clone(), doc);
        ids.push(id);

        for token in article_tokens.title {
            title.insert(token, doc);
        }
        for token in article_tokens.content {
            content.insert(token, doc);
        }
        for token in article_tokens.category {
            category.insert(token, doc);
        }
        for token in article_tokens.source {
            source.insert(token, doc);
        }
    }

    SearchIndex {
        articles,
        ids,
        by_id,
        title,
        content,
        category,
        source,
        built_at: Utc::now(),
        checksum: hasher.finalize(),
    }
}

fn log_built(index: &SearchIndex, start: Instant, mode: &str) {
    debug!(
        mode,
        articles = index.len(),
        title_tokens = index.title.len(),
        content_tokens = index.content.len(),
        category_tokens = index.category.len(),
        source_tokens = index.source.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "built search index"
    );
}
