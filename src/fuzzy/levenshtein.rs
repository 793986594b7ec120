// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with two rolling rows.
//!
//! The classic DP only ever looks at the previous row, so we keep two rows
//! sized to the shorter string. A 10k-character token costs 10k cells of
//! memory, not 100M.

use std::mem;

/// Levenshtein distance between `a` and `b`, in characters.
///
/// Insertion, deletion and substitution each cost 1. Works on Unicode scalar
/// values, so "café" vs "cafe" is one substitution, not two byte edits.
pub fn levenshtein(a: &str, b: &str) -> usize {
    // Use character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Rows are indexed by the shorter string
    let (long, short, short_len) = if a_len >= b_len {
        (a, b, b_len)
    } else {
        (b, a, a_len)
    };

    if short_len == 0 {
        return a_len.max(b_len);
    }

    let short: Vec<char> = short.chars().collect();
    let mut prev: Vec<usize> = (0..=short_len).collect();
    let mut curr: Vec<usize> = vec![0; short_len + 1];

    for (i, lc) in long.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let cost = usize::from(lc != sc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        mem::swap(&mut prev, &mut curr);
    }

    prev[short_len]
}
