// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of an article search.
//!
//! Articles come in from feed ingestion, get an identifier derived from their
//! link and position, and come back out wrapped in a [`SearchResult`] that
//! remembers which fields matched.
//!
//! # Invariants
//!
//! - **DocId**: `doc_id < index.len()`. It is the ordinal of the article in the
//!   collection the index was built from, nothing more.
//! - **Article identifier**: `"<link>-<ordinal>"`. Unique within one index even
//!   when two articles share a link, but meaningless across rebuilds.
//! - **FieldSet**: only ever holds the four searchable fields.

use chrono::{DateTime, Utc};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Ordinal position of an article in the collection an index was built from.
///
/// Postings store these instead of identifier strings; the identifier is
/// recovered through [`crate::SearchIndex::article_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Build the identifier for the article at `ordinal`: `"<link>-<ordinal>"`.
pub fn article_id(link: &str, ordinal: usize) -> String {
    format!("{}-{}", link, ordinal)
}

// =============================================================================
// ARTICLES
// =============================================================================

/// A feed article, as handed over by feed ingestion.
///
/// The search engine never mutates these. `categories` defaults to empty when
/// absent, which searches the same as having none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub link: String,
    pub pub_date: DateTime<Utc>,
    pub source_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

// =============================================================================
// FIELDS
// =============================================================================

/// A searchable article field.
///
/// `Content` is the article description; `Source` is the feed's title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Content,
    Category,
    Source,
}

impl Field {
    /// All fields, in the order a search visits them.
    pub const ALL: [Field; 4] = [Field::Title, Field::Content, Field::Category, Field::Source];

    /// Name used in results and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
            Field::Category => "category",
            Field::Source => "source",
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of fields an article matched in.
///
/// Four fields fit in a byte, so this is `Copy` and iterates in
/// [`Field::ALL`] order regardless of insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldSet(u8);

impl FieldSet {
    pub fn new() -> Self {
        FieldSet(0)
    }

    pub fn insert(&mut self, field: Field) {
        self.0 |= field.bit();
    }

    pub fn contains(self, field: Field) -> bool {
        self.0 & field.bit() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut set = FieldSet::new();
        for field in iter {
            set.insert(field);
        }
        set
    }
}

impl Serialize for FieldSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for field in self.iter() {
            seq.serialize_element(field.as_str())?;
        }
        seq.end()
    }
}

// =============================================================================
// OPTIONS AND RESULTS
// =============================================================================

/// Default minimum similarity for a fuzzy candidate to count.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

/// Which fields to search, and how close a fuzzy match has to be.
///
/// Deserializes from the camelCase keys the UI sends (`includeTitle`,
/// `fuzzyThreshold`, ...). Missing keys take their defaults and unknown keys
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub include_title: bool,
    pub include_content: bool,
    pub include_categories: bool,
    pub include_source: bool,
    pub fuzzy_threshold: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            include_title: true,
            include_content: true,
            include_categories: true,
            include_source: true,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

impl SearchOptions {
    pub fn with_title(mut self, include: bool) -> Self {
        self.include_title = include;
        self
    }

    pub fn with_content(mut self, include: bool) -> Self {
        self.include_content = include;
        self
    }

    pub fn with_categories(mut self, include: bool) -> Self {
        self.include_categories = include;
        self
    }

    pub fn with_source(mut self, include: bool) -> Self {
        self.include_source = include;
        self
    }

    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    /// Is this field switched on?
    pub fn includes(&self, field: Field) -> bool {
        match field {
            Field::Title => self.include_title,
            Field::Content => self.include_content,
            Field::Category => self.include_categories,
            Field::Source => self.include_source,
        }
    }

    /// Enabled fields, in search order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(move |f| self.includes(*f))
    }
}

/// One ranked hit. Borrows the article from the index it came from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub id: &'a str,
    pub article: &'a Article,
    pub score: f64,
    pub matched_fields: FieldSet,
}
