//! Input validation predicates.
//!
//! None of these fail: absent or empty input is simply not valid, with the
//! one exception of [`has_max_length`], where an absent string satisfies
//! any upper bound.

use lazy_static::lazy_static;
use regex::Regex;

use crate::text;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(
        r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$"
    ).unwrap();
    // 2 to 15 digits, no leading zero, no national rules
    static ref PHONE: Regex = Regex::new(r"^\+?[1-9][0-9]{1,14}$").unwrap();
    // ASCII whitespace only, wider Unicode spaces are not separators
    static ref PHONE_SEPARATORS: Regex = Regex::new(r"[ \t\n\x0B\f\r()-]").unwrap();
    static ref URL: Regex = Regex::new(
        r"^(https?|ftp|file)://[-a-zA-Z0-9+&@#/%?=~_|!:,.;]*[-a-zA-Z0-9+&@#/%=~_|]$"
    ).unwrap();
}

fn present(s: Option<&str>) -> Option<&str> {
    s.filter(|_| text::is_not_empty(s))
}

pub fn is_valid_email(s: Option<&str>) -> bool {
    present(s).is_some_and(|s| EMAIL.is_match(s))
}

/// Spaces, parentheses and hyphens are ignored, so `"(123) 456-7890"` passes.
pub fn is_valid_phone(s: Option<&str>) -> bool {
    present(s).is_some_and(|s| PHONE.is_match(&PHONE_SEPARATORS.replace_all(s, "")))
}

pub fn is_valid_url(s: Option<&str>) -> bool {
    present(s).is_some_and(|s| URL.is_match(s))
}

/// The whole string must read as an `f64`.
pub fn is_numeric(s: Option<&str>) -> bool {
    present(s).is_some_and(|s| s.parse::<f64>().is_ok())
}

/// The whole string must read as an `i32`.
pub fn is_integer(s: Option<&str>) -> bool {
    present(s).is_some_and(|s| s.parse::<i32>().is_ok())
}

pub fn is_alphabetic(s: Option<&str>) -> bool {
    present(s).is_some_and(|s| s.chars().all(|c| c.is_ascii_alphabetic()))
}

pub fn is_alphanumeric(s: Option<&str>) -> bool {
    present(s).is_some_and(|s| s.chars().all(|c| c.is_ascii_alphanumeric()))
}

pub fn has_min_length(s: Option<&str>, min_length: usize) -> bool {
    s.is_some_and(|s| s.chars().count() >= min_length)
}

pub fn has_max_length(s: Option<&str>, max_length: usize) -> bool {
    s.is_none_or(|s| s.chars().count() <= max_length)
}

pub fn is_length_in_range(s: Option<&str>, min_length: usize, max_length: usize) -> bool {
    has_min_length(s, min_length) && has_max_length(s, max_length)
}

/// Inclusive at both ends, for integers and floats alike.
pub fn is_in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

pub fn is_not_null<T>(value: Option<&T>) -> bool {
    value.is_some()
}

/// An absent list fails, an empty one passes.
pub fn are_all_not_null<T>(values: Option<&[Option<T>]>) -> bool {
    values.is_some_and(|values| values.iter().all(Option::is_some))
}
