//! String predicates and transformations.
//!
//! An absent string (`None`) is kept apart from an empty one: the predicates
//! treat both as empty, while the transformations hand `None` straight back.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_SEPARATORS: Regex = Regex::new(r"[\s_-]+").unwrap();
}

pub const ELLIPSIS: &str = "...";

pub fn is_empty(s: Option<&str>) -> bool {
    s.is_none_or(str::is_empty)
}

pub fn is_not_empty(s: Option<&str>) -> bool {
    !is_empty(s)
}

/// Absent, empty or nothing but whitespace.
pub fn is_blank(s: Option<&str>) -> bool {
    s.is_none_or(|s| s.trim().is_empty())
}

pub fn is_not_blank(s: Option<&str>) -> bool {
    !is_blank(s)
}

/// Upper-cases the first character and lower-cases the rest.
///
/// When the upper-case form of the first character is several characters
/// long, only the first of those stays upper-case (`"ß"` gives `"Ss"`), so
/// capitalizing twice changes nothing.
pub fn capitalize(s: Option<&str>) -> Option<String> {
    s.map(capitalize_word)
}

fn capitalize_word(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut upper = first.to_uppercase();
            let mut word: String = upper.next().into_iter().collect();
            let tail: String = upper.chain(chars).collect();
            word.push_str(&tail.to_lowercase());
            word
        }
        None => String::new(),
    }
}

pub fn reverse(s: Option<&str>) -> Option<String> {
    s.map(|s| s.chars().rev().collect())
}

/// Counts non-overlapping matches scanning left to right, so
/// `count_occurrences("aaa", "aa")` is 1.
pub fn count_occurrences(haystack: Option<&str>, needle: Option<&str>) -> usize {
    match (haystack, needle) {
        (Some(haystack), Some(needle)) if !haystack.is_empty() && !needle.is_empty() => {
            haystack.matches(needle).count()
        }
        _ => 0,
    }
}

/// `"hello-world_test"` becomes `"helloWorldTest"`.
///
/// Words are split on runs of whitespace, hyphens and underscores. The first
/// word is lower-cased, the others capitalized. A leading separator leaves an
/// empty first word behind, so `"_foo_bar"` gives `"FooBar"`.
pub fn to_camel_case(s: Option<&str>) -> Option<String> {
    let s = s?;
    if s.is_empty() {
        return Some(String::new());
    }
    let mut words: Vec<&str> = WORD_SEPARATORS.split(s).collect();
    while words.last().is_some_and(|w| w.is_empty()) {
        words.pop();
    }
    let Some((first, rest)) = words.split_first() else {
        // nothing but separators
        return Some(s.to_lowercase());
    };
    let mut camel = first.to_lowercase();
    for word in rest {
        camel.push_str(&capitalize_word(word));
    }
    Some(camel)
}

/// Joins `items` with `delimiter`, an empty list gives an empty string.
pub fn join<S: AsRef<str>>(delimiter: &str, items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<&str>>()
        .join(delimiter)
}

/// Shortens `s` to `max_length` characters, the last three replaced by
/// [`ELLIPSIS`]. Strings that already fit come back unchanged.
///
/// Below three characters there is no room for any text, and the result is
/// the ellipsis cut down to `max_length`.
pub fn truncate(s: Option<&str>, max_length: usize) -> Option<String> {
    let s = s?;
    if s.chars().count() <= max_length {
        return Some(s.to_string());
    }
    let kept = max_length.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = s.chars().take(kept).collect();
    truncated.extend(ELLIPSIS.chars().take(max_length - kept));
    Some(truncated)
}
