// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

use feedsift::testing::synthetic_articles;
use feedsift::{build_index, load_articles, search, SearchOptions, SearchResult};

mod cli;
use cli::display::{self, DIM};
use cli::{Cli, Commands};

/// Build and search should each stay under this over 1,000 articles.
const BUDGET_MS: f64 = 100.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            json,
            options,
        } => options
            .resolve()
            .and_then(|options| run_search(&file, &query, limit, json, &options)),
        Commands::Inspect { file, json } => run_inspect(&file, json),
        Commands::Bench {
            articles,
            iterations,
            query,
        } => run_bench(articles, iterations, &query),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_search(
    file: &Path,
    query: &str,
    limit: usize,
    json: bool,
    options: &SearchOptions,
) -> Result<(), String> {
    let articles = load_articles(file).map_err(|e| e.to_string())?;
    let index = build_index(articles);

    let start = Instant::now();
    let results = search(&index, query, options);
    let elapsed = start.elapsed();
    let shown = &results[..results.len().min(limit)];

    if json {
        let out = serde_json::to_string_pretty(shown)
            .map_err(|e| format!("Failed to serialize results: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    print_results(query, shown, results.len(), elapsed);
    Ok(())
}

fn print_results(query: &str, shown: &[SearchResult<'_>], total: usize, elapsed: Duration) {
    display::section_top(&format!("RESULTS for \"{}\"", query));

    if shown.is_empty() {
        display::row(" no matches");
    }

    for (rank, result) in shown.iter().enumerate() {
        let title = display::highlight_terms(&display::truncate(&result.article.title, 50), query);
        display::row(&format!(
            " {:>2}. {} {}",
            rank + 1,
            display::score_value(result.score),
            title
        ));

        let meta = format!(
            "{} · {} · {}",
            result.article.source_title,
            result.article.pub_date.format("%Y-%m-%d"),
            display::field_set(result.matched_fields)
        );
        display::row(&format!(
            "          {}",
            display::themed(display::GRAY, &[DIM], &meta)
        ));
    }

    display::section_mid("SUMMARY");
    display::row(&format!(
        " {} of {} results in {:.3} ms",
        shown.len(),
        total,
        elapsed.as_secs_f64() * 1000.0
    ));
    display::section_bot();
}

fn run_inspect(file: &Path, json: bool) -> Result<(), String> {
    let articles = load_articles(file).map_err(|e| e.to_string())?;
    let index = build_index(articles);
    let stats = index.stats();

    if json {
        let out = serde_json::to_string_pretty(&stats)
            .map_err(|e| format!("Failed to serialize stats: {}", e))?;
        println!("{}", out);
        return Ok(());
    }

    display::section_top("INDEX");
    display::row(&format!(" articles   {}", stats.articles));
    display::row(&format!(" checksum   {:08x}", index.checksum()));
    display::row(&format!(" built at   {}", index.built_at().to_rfc3339()));
    display::section_mid("FIELDS");
    display::row(&format!(
        " {} {:>10} {:>10}",
        display::pad_right("field", 12),
        "tokens",
        "postings"
    ));
    for field in &stats.fields {
        display::row(&format!(
            " {} {:>10} {:>10}",
            display::pad_right(&display::field_label(field.field), 12),
            field.tokens,
            field.postings
        ));
    }
    display::section_bot();
    Ok(())
}

fn run_bench(count: usize, iterations: usize, query: &str) -> Result<(), String> {
    if iterations == 0 {
        return Err("iterations must be at least 1".to_string());
    }

    let articles = synthetic_articles(count);
    let options = SearchOptions::default();

    let pb = ProgressBar::new(iterations as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len}")
            .map_err(|e| e.to_string())?
            .progress_chars("━━╸"),
    );
    pb.set_prefix("Benchmark");

    let mut build_total = Duration::ZERO;
    let mut search_total = Duration::ZERO;
    let mut result_count = 0;

    for _ in 0..iterations {
        let start = Instant::now();
        let index = build_index(articles.clone());
        build_total += start.elapsed();

        let start = Instant::now();
        result_count = search(&index, query, &options).len();
        search_total += start.elapsed();

        pb.inc(1);
    }
    pb.finish_and_clear();

    let mean_ms = |total: Duration| total.as_secs_f64() * 1000.0 / iterations as f64;

    display::section_top("BENCHMARK");
    display::row(&format!(" articles   {}", count));
    display::row(&format!(" query      \"{}\" ({} results)", query, result_count));
    display::row(&format!(" rounds     {}", iterations));
    display::section_mid("MEAN (ms)");
    display::row(&format!(
        " build  {} / {:.0} budget",
        display::timing_ms(mean_ms(build_total), BUDGET_MS),
        BUDGET_MS
    ));
    display::row(&format!(
        " search {} / {:.0} budget",
        display::timing_ms(mean_ms(search_total), BUDGET_MS),
        BUDGET_MS
    ));
    display::section_bot();
    Ok(())
}
