//! The date/time pattern vocabulary.
//!
//! Patterns are compiled into a list of [`Token`]s once and then either
//! rendered against a date-time or matched against input text. The table is
//! deliberately small and fixed:
//!
//! | token  | meaning                         |
//! |--------|---------------------------------|
//! | `yyyy` | four digit year                 |
//! | `MMM`  | abbreviated month, `Jan`..`Dec` |
//! | `MM`   | two digit month                 |
//! | `dd`   | two digit day of month          |
//! | `HH`   | two digit hour, 00-23           |
//! | `mm`   | two digit minute                |
//! | `ss`   | two digit second                |
//! | `'..'` | quoted literal, `''` is a quote |
//!
//! Anything else passes through as literal text.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use std::fmt::Write;

use crate::error::{Result, SundryError};

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Year,
    MonthName,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Literal(String),
}

impl Token {
    fn width(&self) -> usize {
        match self {
            Token::Year => 4,
            Token::MonthName => 3,
            Token::Literal(text) => text.chars().count(),
            _ => 2,
        }
    }
}

// longest first, so MMM wins over MM
static SYMBOLS: [(&str, Token); 7] = [
    ("yyyy", Token::Year),
    ("MMM", Token::MonthName),
    ("MM", Token::Month),
    ("dd", Token::Day),
    ("HH", Token::Hour),
    ("mm", Token::Minute),
    ("ss", Token::Second),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    pub fn compile(pattern: &str) -> Pattern {
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut rest = pattern;
        'scan: while let Some(c) = rest.chars().next() {
            if c == '\'' {
                rest = &rest[1..];
                if let Some(after) = rest.strip_prefix('\'') {
                    literal.push('\'');
                    rest = after;
                    continue;
                }
                // an unterminated quote runs to the end of the pattern
                let end = rest.find('\'').unwrap_or(rest.len());
                literal.push_str(&rest[..end]);
                rest = rest.get(end + 1..).unwrap_or("");
                continue;
            }
            for (symbol, token) in SYMBOLS.iter() {
                if let Some(after) = rest.strip_prefix(symbol) {
                    if !literal.is_empty() {
                        tokens.push(Token::Literal(std::mem::take(&mut literal)));
                    }
                    tokens.push(token.clone());
                    rest = after;
                    continue 'scan;
                }
            }
            literal.push(c);
            rest = &rest[c.len_utf8()..];
        }
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }
        Pattern { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn has_date_fields(&self) -> bool {
        let month = self.contains(&Token::Month) || self.contains(&Token::MonthName);
        self.contains(&Token::Year) && month && self.contains(&Token::Day)
    }

    pub fn has_time_fields(&self) -> bool {
        self.contains(&Token::Hour)
    }

    fn contains(&self, token: &Token) -> bool {
        self.tokens.contains(token)
    }

    pub fn format_date(&self, date: &NaiveDate) -> String {
        self.format_date_time(&date.and_time(NaiveTime::MIN))
    }

    pub fn format_date_time(&self, moment: &NaiveDateTime) -> String {
        let mut out = String::with_capacity(self.tokens.iter().map(Token::width).sum());
        for token in &self.tokens {
            // writing into a String cannot fail
            let _ = match token {
                Token::Year => write!(out, "{:04}", moment.year()),
                Token::MonthName => write!(out, "{}", MONTH_ABBREVIATIONS[moment.month0() as usize]),
                Token::Month => write!(out, "{:02}", moment.month()),
                Token::Day => write!(out, "{:02}", moment.day()),
                Token::Hour => write!(out, "{:02}", moment.hour()),
                Token::Minute => write!(out, "{:02}", moment.minute()),
                Token::Second => write!(out, "{:02}", moment.second()),
                Token::Literal(text) => write!(out, "{}", text),
            };
        }
        out
    }

    pub fn parse_date(&self, text: &str) -> Result<NaiveDate> {
        let fields = self.scan(text)?;
        let date = fields.date()?;
        // time fields are checked even though a date drops them
        fields.time()?;
        Ok(date)
    }

    pub fn parse_date_time(&self, text: &str) -> Result<NaiveDateTime> {
        let fields = self.scan(text)?;
        if fields.hour.is_none() {
            return Err(SundryError::Parse {
                message: "pattern has no hour field".into(),
                position: None,
            });
        }
        Ok(fields.date()?.and_time(fields.time()?))
    }

    fn scan(&self, text: &str) -> Result<Fields> {
        let mut fields = Fields::default();
        let mut position = 0;
        let mut rest = text;
        for token in &self.tokens {
            let consumed = match token {
                Token::Literal(expected) => {
                    match rest.strip_prefix(expected.as_str()) {
                        Some(_) => expected.len(),
                        None => {
                            return Err(SundryError::parse_at(format!("expected '{}'", expected), position));
                        }
                    }
                }
                Token::MonthName => {
                    let index = MONTH_ABBREVIATIONS
                        .iter()
                        .position(|name| rest.starts_with(name))
                        .ok_or_else(|| SundryError::parse_at("expected a month name", position))?;
                    fields.month = Some(index as u32 + 1);
                    3
                }
                numeric => {
                    let width = numeric.width();
                    let digits = rest
                        .get(..width)
                        .filter(|d| d.bytes().all(|b| b.is_ascii_digit()))
                        .ok_or_else(|| SundryError::parse_at(format!("expected {} digits", width), position))?;
                    let value: u32 = digits
                        .parse()
                        .map_err(|_| SundryError::parse_at(format!("expected {} digits", width), position))?;
                    match numeric {
                        Token::Year => fields.year = Some(value as i32),
                        Token::Month => fields.month = Some(value),
                        Token::Day => fields.day = Some(value),
                        Token::Hour => fields.hour = Some(value),
                        Token::Minute => fields.minute = Some(value),
                        _ => fields.second = Some(value),
                    }
                    width
                }
            };
            rest = &rest[consumed..];
            position += consumed;
        }
        if !rest.is_empty() {
            return Err(SundryError::parse_at("unparsed text remains", position));
        }
        Ok(fields)
    }
}

#[derive(Debug, Default)]
struct Fields {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
}

impl Fields {
    fn date(&self) -> Result<NaiveDate> {
        match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| SundryError::Parse {
                    message: format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
                    position: None,
                }),
            _ => Err(SundryError::Parse {
                message: "pattern needs year, month and day fields".into(),
                position: None,
            }),
        }
    }
    fn time(&self) -> Result<NaiveTime> {
        let (hour, minute, second) = (
            self.hour.unwrap_or(0),
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
        );
        NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| SundryError::Parse {
            message: format!("{:02}:{:02}:{:02} is not a time of day", hour, minute, second),
            position: None,
        })
    }
}
