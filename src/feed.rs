// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading article collections from JSON.
//!
//! Feed ingestion hands over a JSON array of articles. Order matters: it
//! becomes the ordinal part of every article identifier.

use crate::types::Article;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid article JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Parse a JSON array of articles.
pub fn parse_articles(json: &str) -> Result<Vec<Article>, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse an article file.
pub fn load_articles(path: impl AsRef<Path>) -> Result<Vec<Article>, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_articles(&json)
}
