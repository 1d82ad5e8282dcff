//! Civil date and date-time helpers.
//!
//! Nothing here knows about time zones: dates are [`NaiveDate`], moments are
//! [`NaiveDateTime`] at second precision, and "now" is the local wall clock.
//! Absent arguments never fail, they produce `None`, `0` or `false`.

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};

use crate::error::{Result, SundryError};
use crate::pattern::Pattern;
use crate::text;

pub const ISO_DATE: &str = "yyyy-MM-dd";
pub const ISO_DATE_TIME: &str = "yyyy-MM-dd'T'HH:mm:ss";

pub fn format_date(date: Option<NaiveDate>, pattern: Option<&str>) -> Option<String> {
    Some(Pattern::compile(pattern?).format_date(&date?))
}

pub fn format_date_time(moment: Option<NaiveDateTime>, pattern: Option<&str>) -> Option<String> {
    Some(Pattern::compile(pattern?).format_date_time(&moment?))
}

/// Reads `text` according to `pattern`.
///
/// Returns `Ok(None)` when either argument is absent or blank, and a
/// [`SundryError::Parse`] when the text does not fit the pattern.
pub fn parse_date(text: Option<&str>, pattern: Option<&str>) -> Result<Option<NaiveDate>> {
    match (text, pattern) {
        (Some(text), Some(pattern)) if text::is_not_blank(Some(text)) && text::is_not_blank(Some(pattern)) => {
            Pattern::compile(pattern).parse_date(text).map(Some)
        }
        _ => Ok(None),
    }
}

/// Same as [`parse_date`], the pattern must carry at least the hour.
pub fn parse_date_time(text: Option<&str>, pattern: Option<&str>) -> Result<Option<NaiveDateTime>> {
    match (text, pattern) {
        (Some(text), Some(pattern)) if text::is_not_blank(Some(text)) && text::is_not_blank(Some(pattern)) => {
            Pattern::compile(pattern).parse_date_time(text).map(Some)
        }
        _ => Ok(None),
    }
}

/// `end - start` in days, negative when `end` comes first.
pub fn days_between(start: Option<NaiveDate>, end: Option<NaiveDate>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => end.signed_duration_since(start).num_days(),
        _ => 0,
    }
}

/// Whole hours from `start` to `end`, truncated toward zero.
pub fn hours_between(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => end.signed_duration_since(start).num_hours(),
        _ => 0,
    }
}

/// The local civil date at the moment of the call.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_in_past(date: Option<NaiveDate>) -> bool {
    date.is_some_and(|d| d < today())
}

pub fn is_in_future(date: Option<NaiveDate>) -> bool {
    date.is_some_and(|d| d > today())
}

pub fn is_today(date: Option<NaiveDate>) -> bool {
    date.is_some_and(|d| d == today())
}

/// Today as `YYYY-MM-DD`.
pub fn current_date_iso() -> String {
    Pattern::compile(ISO_DATE).format_date(&today())
}

/// Now as `YYYY-MM-DDTHH:MM:SS`, no offset and no fraction.
pub fn current_date_time_iso() -> String {
    Pattern::compile(ISO_DATE_TIME).format_date_time(&Local::now().naive_local())
}

/// Shifts `date` by `days` calendar days, crossing months, years and leap
/// days. Fails only when the result leaves the supported calendar range.
pub fn add_days(date: Option<NaiveDate>, days: i64) -> Result<Option<NaiveDate>> {
    let Some(date) = date else {
        return Ok(None);
    };
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .map(Some)
        .ok_or_else(|| SundryError::invalid(format!("{} shifted by {} days is out of range", date, days)))
}

pub fn subtract_days(date: Option<NaiveDate>, days: i64) -> Result<Option<NaiveDate>> {
    if date.is_none() {
        return Ok(None);
    }
    let days = days
        .checked_neg()
        .ok_or_else(|| SundryError::invalid(format!("cannot subtract {} days", days)))?;
    add_days(date, days)
}
