// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting query terms in display text.
//!
//! Independent of the index: takes the raw query, splits it on whitespace, and
//! wraps every case-insensitive occurrence of each term. Terms are literal;
//! `$100` matches a dollar sign, not an end anchor.
//!
//! Terms are applied one after another to the text produced so far. A later
//! term can therefore match inside markup inserted by an earlier one:
//! `highlight("Rust", "rust mark")` wraps the `mark` in `<mark>` itself. This
//! is known and kept, so output matches what existing consumers render.

use regex::{Captures, RegexBuilder};
use std::borrow::Cow;
use tracing::warn;

/// Opening and closing strings wrapped around each match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker<'a> {
    pub open: Cow<'a, str>,
    pub close: Cow<'a, str>,
}

impl Marker<'static> {
    /// `<mark>…</mark>`
    pub const HTML: Self = Marker {
        open: Cow::Borrowed("<mark>"),
        close: Cow::Borrowed("</mark>"),
    };
}

impl<'a> Marker<'a> {
    pub fn new(open: impl Into<Cow<'a, str>>, close: impl Into<Cow<'a, str>>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

impl Default for Marker<'static> {
    fn default() -> Self {
        Marker::HTML
    }
}

/// Wrap query terms in `text` with `<mark>` tags.
pub fn highlight(text: &str, query: &str) -> String {
    highlight_with(text, query, &Marker::HTML)
}

/// Wrap query terms in `text` with `marker`.
///
/// A blank query returns `text` unchanged. Terms are not deduplicated or
/// normalized; matching ignores case and the original casing is kept inside
/// the marker.
///
/// Case folding is Unicode simple folding, not ASCII-only: `kelvin` also
/// matches a title spelled with the Kelvin sign (U+212A), and `classic`
/// matches `Claſſic` (long s).
pub fn highlight_with(text: &str, query: &str, marker: &Marker<'_>) -> String {
    let mut highlighted = text.to_string();
    if query.trim().is_empty() {
        return highlighted;
    }

    for term in query.split_whitespace() {
        let pattern = match RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern,
            Err(err) => {
                warn!(term, error = %err, "skipping unhighlightable term");
                continue;
            }
        };

        highlighted = pattern
            .replace_all(&highlighted, |caps: &Captures<'_>| {
                format!("{}{}{}", marker.open, &caps[0], marker.close)
            })
            .into_owned();
    }

    highlighted
}
