//! Word token validation and filtering.
//!
//! Input arrives as a single comma-separated string from the command line.
//! Tokens are trimmed, lowercased, and kept only if they are one or more
//! lowercase Latin letters. Invalid tokens are dropped silently; the filter
//! never fails.

use regex::Regex;
use std::sync::OnceLock;

static WORD_RE: OnceLock<Regex> = OnceLock::new();

/// Whether `s` is a storable word: one or more lowercase Latin letters,
/// nothing else.
pub fn is_valid_word(s: &str) -> bool {
    let re = WORD_RE.get_or_init(|| Regex::new("^[a-z]+$").unwrap());
    re.is_match(s)
}

/// Split a comma-separated input into validated lowercase words.
///
/// Ordering is preserved and duplicates are kept; the caller decides what
/// repeated additions mean.
pub fn filter_words(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| is_valid_word(token))
        .collect()
}
