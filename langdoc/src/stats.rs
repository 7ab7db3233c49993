//! Statistics over a flattened translation map: duplicate-value groups,
//! word counts, and character counts.
//!
//! All scans assume a fully flattened, all-string map and abort with
//! [`Error::MalformedInput`] on the first non-string value.
//! `{{name}}`-style placeholder tokens are substitution markers, not
//! translatable text, so the counters strip them first.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    error::Error,
    keys::{JsonMap, string_values},
};

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{\{[^{}]*\}\}").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Strips placeholder tokens and collapses whitespace runs to single spaces.
fn normalize_value(value: &str) -> String {
    let stripped = PLACEHOLDER_REGEX.replace_all(value, "");
    WHITESPACE_REGEX.replace_all(&stripped, " ").into_owned()
}

/// Groups keys by identical string value, in first-encounter order, and
/// returns only groups sharing a value between two or more keys.
pub fn find_duplicates(flat: &JsonMap) -> Result<Vec<(String, Vec<String>)>, Error> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for (key, value) in string_values(flat)? {
        match groups.iter_mut().find(|(v, _)| v == value) {
            Some((_, keys)) => keys.push(key.to_string()),
            None => groups.push((value.to_string(), vec![key.to_string()])),
        }
    }
    groups.retain(|(_, keys)| keys.len() > 1);
    Ok(groups)
}

/// Sums word counts across all values.
///
/// Placeholder tokens are stripped first, so punctuation they leave behind
/// (a bare `,` after removing `{{name}}`) is not counted as a word: a
/// fragment only counts when it contains at least one alphanumeric
/// character.
pub fn count_words(flat: &JsonMap) -> Result<usize, Error> {
    let mut total = 0;
    for (_, value) in string_values(flat)? {
        total += normalize_value(value)
            .split(' ')
            .filter(|fragment| fragment.chars().any(char::is_alphanumeric))
            .count();
    }
    Ok(total)
}

/// Sums character counts (Unicode scalar values) across all values, with
/// placeholder tokens stripped and whitespace collapsed; when
/// `include_spaces` is false, whitespace is removed entirely first.
pub fn count_chars(flat: &JsonMap, include_spaces: bool) -> Result<usize, Error> {
    let mut total = 0;
    for (_, value) in string_values(flat)? {
        let normalized = normalize_value(value);
        if include_spaces {
            total += normalized.chars().count();
        } else {
            total += normalized.chars().filter(|c| !c.is_whitespace()).count();
        }
    }
    Ok(total)
}
