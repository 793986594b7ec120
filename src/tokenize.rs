// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning free text into index tokens.
//!
//! Lowercase, treat anything outside `[a-z0-9_]` as a separator, and drop
//! words of two characters or fewer. Queries and articles go through the same
//! function, so a query word that never becomes a token can never match.

/// Shortest token kept, in bytes. Anything shorter is dropped.
pub const MIN_TOKEN_LEN: usize = 3;

/// Word characters: ASCII alphanumerics and underscore.
///
/// Non-ASCII letters are separators, so "café" yields "caf".
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split `text` into lowercase word tokens of at least [`MIN_TOKEN_LEN`] bytes.
///
/// Tokens come back in the order they appear, duplicates included.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !is_word_char(c))
        .filter(|word| word.len() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}
