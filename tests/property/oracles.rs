//! Reference implementations for differential testing.
//!
//! Written for obviousness, not speed. The optimized code in `feedsift` must
//! agree with these on every input.

use feedsift::{Article, Field, SearchOptions, CATEGORY_WEIGHT, CONTENT_WEIGHT, SOURCE_WEIGHT, TITLE_WEIGHT};
use regex::Regex;

// ============================================================================
// LEVENSHTEIN
// ============================================================================

/// Textbook edit distance over chars with the full (m+1)×(n+1) matrix.
pub fn levenshtein_matrix(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut d = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        d[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
        }
    }

    d[a.len()][b.len()]
}

// ============================================================================
// TOKENIZER
// ============================================================================

/// Lowercase, split on anything that is not an ASCII word character, keep
/// words longer than two bytes.
pub fn tokenize_regex(text: &str) -> Vec<String> {
    let separator = Regex::new("[^A-Za-z0-9_]+").unwrap();
    separator
        .split(&text.to_lowercase())
        .filter(|word| word.len() > 2)
        .map(str::to_string)
        .collect()
}

// ============================================================================
// EXACT SCORING
// ============================================================================

fn field_text(article: &Article, field: Field) -> Vec<String> {
    match field {
        Field::Title => tokenize_regex(&article.title),
        Field::Content => tokenize_regex(article.description.as_deref().unwrap_or("")),
        Field::Category => article
            .categories
            .iter()
            .flat_map(|category| tokenize_regex(category))
            .collect(),
        Field::Source => tokenize_regex(&article.source_title),
    }
}

fn weight(field: Field) -> f64 {
    match field {
        Field::Title => TITLE_WEIGHT,
        Field::Content => CONTENT_WEIGHT,
        Field::Category => CATEGORY_WEIGHT,
        Field::Source => SOURCE_WEIGHT,
    }
}

/// Score of one article with fuzzy matching off: every occurrence of every
/// query token in an enabled field adds that field's weight.
pub fn exact_score(article: &Article, query: &str, options: &SearchOptions) -> f64 {
    let query_tokens = tokenize_regex(query);
    let mut score = 0.0;

    for field in Field::ALL {
        if !options.includes(field) {
            continue;
        }
        let tokens = field_text(article, field);
        for query_token in &query_tokens {
            let occurrences = tokens.iter().filter(|t| *t == query_token).count();
            score += weight(field) * occurrences as f64;
        }
    }

    score
}
