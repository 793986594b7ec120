// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy candidate pruning.
//!
//! Scoring every token in a field against every query token is what makes
//! naive fuzzy search slow. Three cheap filters run before any edit distance:
//!
//! 1. **Length window**: the candidate must be within `[⌈0.7·n⌉, ⌊1.3·n⌋]`
//!    characters of an `n`-character query token.
//! 2. **First character**: the candidate must start with the same character.
//! 3. **Cap**: at most [`MAX_FUZZY_CANDIDATES`] survivors are scored per
//!    (query token, field) pair, in index insertion order.
//!
//! These are lossy on purpose. A typo in the first letter is never found, and
//! the cap can skip a better candidate that sits later in the field. Both keep
//! the cost per query token bounded regardless of vocabulary size.

use crate::index::Term;
use std::slice;
use tracing::trace;

/// Most candidates scored for one (query token, field) pair.
pub const MAX_FUZZY_CANDIDATES: usize = 50;

/// Shortest candidate, as a fraction of the query token's length.
pub const MIN_LENGTH_RATIO: f64 = 0.7;

/// Longest candidate, as a fraction of the query token's length.
pub const MAX_LENGTH_RATIO: f64 = 1.3;

/// Inclusive range of candidate lengths worth scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthWindow {
    pub min: usize,
    pub max: usize,
}

impl LengthWindow {
    pub fn for_query(len: usize) -> Self {
        let len = len as f64;
        Self {
            min: (MIN_LENGTH_RATIO * len).ceil() as usize,
            max: (MAX_LENGTH_RATIO * len).floor() as usize,
        }
    }

    #[inline]
    pub fn contains(self, len: usize) -> bool {
        len >= self.min && len <= self.max
    }
}

/// Terms of a field that survive pruning for one query token.
///
/// Tokens are ASCII by construction, so byte length is character length.
pub struct FuzzyCandidates<'a> {
    first: Option<char>,
    window: LengthWindow,
    terms: slice::Iter<'a, Term>,
    yielded: usize,
}

impl<'a> FuzzyCandidates<'a> {
    pub fn new(query_token: &str, terms: slice::Iter<'a, Term>) -> Self {
        Self {
            first: query_token.chars().next(),
            window: LengthWindow::for_query(query_token.len()),
            terms,
            yielded: 0,
        }
    }
}

impl<'a> Iterator for FuzzyCandidates<'a> {
    type Item = &'a Term;

    fn next(&mut self) -> Option<Self::Item> {
        if self.yielded >= MAX_FUZZY_CANDIDATES {
            return None;
        }

        for term in self.terms.by_ref() {
            if !self.window.contains(term.token.len()) {
                continue;
            }
            if term.token.chars().next() != self.first {
                continue;
            }

            self.yielded += 1;
            if self.yielded == MAX_FUZZY_CANDIDATES {
                trace!(cap = MAX_FUZZY_CANDIDATES, "fuzzy candidate cap reached");
            }
            return Some(term);
        }

        None
    }
}
