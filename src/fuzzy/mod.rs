// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via normalized edit distance.
//!
//! Similarity lives in `[0, 1]`. Identical tokens score 1.0, a token that
//! contains the other scores a flat 0.9, and everything else falls back to
//! `1 - distance / longest`.

mod levenshtein;

pub use levenshtein::levenshtein;

/// Similarity for tokens where one contains the other.
///
/// Fixed, not derived from distance: "react" vs "reactjs" is 0.9 no matter how
/// long the suffix is.
pub const SUBSTRING_SIMILARITY: f64 = 0.9;

/// How alike are two tokens? `1.0` is identical, `0.0` is nothing in common.
///
/// The empty string is a substring of everything, so `similarity("", "abc")`
/// is [`SUBSTRING_SIMILARITY`].
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.contains(b) || b.contains(a) {
        return SUBSTRING_SIMILARITY;
    }

    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }

    let distance = levenshtein(a, b) as f64;
    (1.0 - distance / longest as f64).clamp(0.0, 1.0)
}
