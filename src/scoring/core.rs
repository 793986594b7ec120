// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field weights.
//!
//! | Field    | Weight |
//! |----------|--------|
//! | Title    | 3.0    |
//! | Category | 2.0    |
//! | Source   | 1.5    |
//! | Content  | 1.0    |
//!
//! Unlike a strict hierarchy, these are additive: two content matches plus a
//! source match can outrank a single title match. Existing rankings depend on
//! these exact values.

use crate::types::Field;

/// Weight for title matches.
pub const TITLE_WEIGHT: f64 = 3.0;

/// Weight for category tag matches.
pub const CATEGORY_WEIGHT: f64 = 2.0;

/// Weight for feed source title matches.
pub const SOURCE_WEIGHT: f64 = 1.5;

/// Weight for description matches.
pub const CONTENT_WEIGHT: f64 = 1.0;

/// Similarity credited to an exact token match.
pub const EXACT_MATCH_SIMILARITY: f64 = 1.0;

/// Weight for a match in `field`.
pub fn field_weight(field: Field) -> f64 {
    match field {
        Field::Title => TITLE_WEIGHT,
        Field::Content => CONTENT_WEIGHT,
        Field::Category => CATEGORY_WEIGHT,
        Field::Source => SOURCE_WEIGHT,
    }
}

/// Score one posting: `similarity × weight(field)`.
#[inline]
pub fn match_score(field: Field, similarity: f64) -> f64 {
    similarity * field_weight(field)
}
