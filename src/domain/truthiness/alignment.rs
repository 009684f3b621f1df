//! Lexical alignment between a grounded answer and its source

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of characters outside the ASCII word class
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());

/// Tokens must be strictly longer than this to count
pub const MIN_TOKEN_LENGTH: usize = 3;

/// Lowercase `text` and split it on runs of non-word characters.
///
/// Empty tokens at the edges are kept; callers filter by length.
pub fn tokenize(text: &str) -> Vec<String> {
    NON_WORD
        .split(&text.to_lowercase())
        .map(str::to_string)
        .collect()
}

/// Distinct source tokens longer than [`MIN_TOKEN_LENGTH`], in order of first
/// occurrence.
pub fn source_vocabulary(source: &str) -> IndexSet<String> {
    tokenize(source)
        .into_iter()
        .filter(|token| token.len() > MIN_TOKEN_LENGTH)
        .collect()
}

/// Alignment score in `0..=100`.
///
/// Counts every answer token (repeats included) found in the source
/// vocabulary, then divides by the vocabulary size, not by the answer length.
/// An empty source yields 0.
pub fn alignment_score(answer_with_source: &str, source: &str) -> u8 {
    let vocabulary = source_vocabulary(source);

    let match_count = tokenize(answer_with_source)
        .iter()
        .filter(|token| token.len() > MIN_TOKEN_LENGTH && vocabulary.contains(token.as_str()))
        .count();

    let denominator = vocabulary.len().max(1);
    let ratio = match_count as f64 / denominator as f64 * 100.0;

    ratio.round().min(100.0) as u8
}
