// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-field inverted index: token → postings.
//!
//! # Invariants
//!
//! 1. **TOKENIZED_KEYS**: every token came out of [`crate::tokenize`].
//! 2. **OCCURRENCE_POSTINGS**: a posting is pushed per occurrence, so a token
//!    that appears three times in one title lists that article three times.
//!    This is the term-frequency weighting, not a bug.
//! 3. **INSERTION_ORDER**: `iter()` yields tokens in first-seen order. Fuzzy
//!    search caps how many candidates it looks at, so the order decides which
//!    ones get looked at.
//! 4. **NON_EMPTY**: every token has at least one posting.

use crate::types::DocId;
use std::collections::HashMap;

/// A token and every article occurrence of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub token: String,
    pub postings: Vec<DocId>,
}

/// Token → postings for one field, iterable in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldIndex {
    terms: Vec<Term>,
    lookup: HashMap<String, usize>,
}

impl FieldIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token` in article `doc`.
    ///
    /// Crate-private: indexes are only ever filled by the builder.
    pub(crate) fn insert(&mut self, token: String, doc: DocId) {
        if let Some(&slot) = self.lookup.get(&token) {
            self.terms[slot].postings.push(doc);
            return;
        }
        self.lookup.insert(token.clone(), self.terms.len());
        self.terms.push(Term {
            token,
            postings: vec![doc],
        });
    }

    pub fn get(&self, token: &str) -> Option<&Term> {
        self.lookup.get(token).map(|&slot| &self.terms[slot])
    }

    pub fn postings(&self, token: &str) -> Option<&[DocId]> {
        self.get(token).map(|term| term.postings.as_slice())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.lookup.contains_key(token)
    }

    /// Terms in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of posting list lengths (token occurrences across all articles).
    pub fn total_postings(&self) -> usize {
        self.terms.iter().map(|term| term.postings.len()).sum()
    }
}

impl<'a> IntoIterator for &'a FieldIndex {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
