// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query engine: exact lookup first, pruned fuzzy fallback second.
//!
//! For every query token and every enabled field:
//!
//! - **Exact**: if the token is a key in the field, each posting adds
//!   `weight(field)`. Repeated occurrences add repeatedly. Fuzzy matching is
//!   skipped for this (token, field) pair, even if a fuzzy candidate would
//!   also score 1.0.
//! - **Fuzzy**: otherwise, pruned candidates (see [`candidates`]) whose
//!   similarity reaches `fuzzy_threshold` add `similarity × weight(field)` per
//!   posting.
//!
//! Scores are summed per article and sorted descending.
//!
//! # Tie-breaking
//!
//! Articles are collected in the order they first receive a score: query
//! token order, then field order (title, content, category, source), then
//! posting order. The sort is stable, so tied articles keep that order.

pub mod candidates;

use crate::fuzzy::similarity;
use crate::index::{FieldIndex, SearchIndex};
use crate::scoring::{match_score, EXACT_MATCH_SIMILARITY};
use crate::tokenize::tokenize;
use crate::types::{DocId, Field, FieldSet, SearchOptions, SearchResult};
use candidates::FuzzyCandidates;
use std::collections::HashMap;
use std::time::Instant;
use tracing::debug;

/// Running score for one article.
#[derive(Debug, Clone, Copy)]
struct Hit {
    doc: DocId,
    score: f64,
    fields: FieldSet,
}

/// Score accumulator that remembers first-scored order.
#[derive(Debug, Default)]
struct Scores {
    slots: HashMap<DocId, usize>,
    hits: Vec<Hit>,
}

impl Scores {
    fn add(&mut self, doc: DocId, field: Field, amount: f64) {
        let slot = *self.slots.entry(doc).or_insert_with(|| {
            self.hits.push(Hit {
                doc,
                score: 0.0,
                fields: FieldSet::new(),
            });
            self.hits.len() - 1
        });
        let hit = &mut self.hits[slot];
        hit.score += amount;
        hit.fields.insert(field);
    }

    fn add_postings(&mut self, postings: &[DocId], field: Field, similarity: f64) {
        let amount = match_score(field, similarity);
        for &doc in postings {
            self.add(doc, field, amount);
        }
    }
}

/// Search `index` for `query`, best match first.
///
/// Never fails. Blank queries, queries made only of short words or
/// punctuation, and empty indexes all return an empty list.
pub fn search<'a>(
    index: &'a SearchIndex,
    query: &str,
    options: &SearchOptions,
) -> Vec<SearchResult<'a>> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let start = Instant::now();
    let tokens = tokenize(query);
    let mut scores = Scores::default();

    for token in &tokens {
        for field in options.fields() {
            score_field(&mut scores, index.field(field), field, token, options.fuzzy_threshold);
        }
    }

    let mut results: Vec<SearchResult<'a>> = scores
        .hits
        .into_iter()
        .filter_map(|hit| {
            Some(SearchResult {
                id: index.article_id(hit.doc)?,
                article: index.article(hit.doc)?,
                score: hit.score,
                matched_fields: hit.fields,
            })
        })
        .collect();

    // Stable: ties keep first-scored order
    results.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        tokens = tokens.len(),
        results = results.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "search complete"
    );

    results
}

/// Look `token` up in one field, exact first, fuzzy otherwise.
fn score_field(
    scores: &mut Scores,
    index: &FieldIndex,
    field: Field,
    token: &str,
    fuzzy_threshold: f64,
) {
    if let Some(postings) = index.postings(token) {
        scores.add_postings(postings, field, EXACT_MATCH_SIMILARITY);
        return;
    }

    for candidate in FuzzyCandidates::new(token, index.iter()) {
        let similarity = similarity(token, &candidate.token);
        if similarity >= fuzzy_threshold {
            scores.add_postings(&candidate.postings, field, similarity);
        }
    }
}

impl SearchIndex {
    /// Method form of [`search`].
    pub fn search<'a>(&'a self, query: &str, options: &SearchOptions) -> Vec<SearchResult<'a>> {
        search(self, query, options)
    }
}
