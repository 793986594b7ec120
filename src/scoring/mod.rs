// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how much a match is worth, by where it landed.
//!
//! Ranking is a fixed heuristic. A match contributes `similarity × weight`,
//! where exact matches have similarity 1.0 and the weight comes from the
//! field. Contributions from every query token and field are summed.

mod core;

pub use self::core::*;
