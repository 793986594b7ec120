// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the feedsift command-line interface.
//!
//! Three subcommands: `search` to query an article file, `inspect` to look at
//! the index built from it, and `bench` to time build and search over a
//! synthetic corpus.

pub mod display;

use clap::{Args, Parser, Subcommand};
use feedsift::SearchOptions;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "feedsift",
    about = "Typo-tolerant search over feed articles",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a JSON file of articles and display ranked results
    Search {
        /// Path to a JSON array of articles
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Build the index for a JSON file of articles and show its structure
    Inspect {
        /// Path to a JSON array of articles
        file: PathBuf,

        /// Print stats as JSON
        #[arg(long)]
        json: bool,
    },

    /// Time index build and search over a synthetic corpus
    Bench {
        /// Number of synthetic articles
        #[arg(long, default_value = "1000")]
        articles: usize,

        /// Number of build/search rounds
        #[arg(long, default_value = "50")]
        iterations: usize,

        /// Query to time (misspelled on purpose to exercise fuzzy matching)
        #[arg(long, default_value = "kubernets performence")]
        query: String,
    },
}

/// Search options, from a JSON file and/or flags. Flags win.
#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// JSON file with search options (includeTitle, fuzzyThreshold, ...)
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Minimum similarity for fuzzy matches, between 0 and 1
    #[arg(long, value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Don't search titles
    #[arg(long)]
    pub no_title: bool,

    /// Don't search descriptions
    #[arg(long)]
    pub no_content: bool,

    /// Don't search category tags
    #[arg(long)]
    pub no_categories: bool,

    /// Don't search feed source titles
    #[arg(long)]
    pub no_source: bool,
}

impl OptionArgs {
    pub fn resolve(&self) -> Result<SearchOptions, String> {
        let mut options = match &self.options {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
                serde_json::from_str(&json)
                    .map_err(|e| format!("Invalid search options JSON: {}", e))?
            }
            None => SearchOptions::default(),
        };

        if let Some(threshold) = self.threshold {
            options.fuzzy_threshold = threshold;
        }
        if self.no_title {
            options.include_title = false;
        }
        if self.no_content {
            options.include_content = false;
        }
        if self.no_categories {
            options.include_categories = false;
        }
        if self.no_source {
            options.include_source = false;
        }

        Ok(options)
    }
}

fn parse_threshold(value: &str) -> Result<f64, String> {
    let threshold: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(format!("threshold must be between 0 and 1, got {}", threshold))
    }
}
