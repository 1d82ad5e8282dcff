//! Sundry – small, stateless helpers for everyday arithmetic, text, calendar
//! dates and input validation.
//!
//! Every function takes plain values and returns a plain value. There is no
//! shared state, so anything here can be called from any number of threads.
//!
//! ## Modules
//! * [`arithmetic`] – Arithmetic, decimal rounding, min/max/average/sum,
//!   parity, primality, GCD and LCM.
//! * [`text`] – Emptiness and blankness checks, capitalization, reversal,
//!   occurrence counting, camelCase, joining and truncation.
//! * [`temporal`] – Pattern-driven formatting and parsing of civil dates and
//!   date-times, day/hour differences, day shifting and "today" checks.
//! * [`pattern`] – The fixed token vocabulary (`yyyy`, `MMM`, `MM`, `dd`,
//!   `HH`, `mm`, `ss`) behind [`temporal`].
//! * [`validation`] – E-mail, phone and URL checks, numeric and character
//!   class checks, length and range bounds, presence checks.
//! * [`settings`] – Default patterns and log filter read from TOML.
//!
//! ## Absent values
//! Where a value may be missing it is an `Option`. Missing input never causes
//! a failure: it yields a defined result instead (`None`, `0`, `false`, or an
//! empty string), as documented on each function.
//!
//! ## Errors
//! Real failures are reported through [`error::SundryError`]:
//! * `DivisionByZero` from [`arithmetic::divide`],
//! * `InvalidArgument` for negative input to `sqrt`, `factorial` or `round`
//!   and for empty input to `min`, `max` or `average`,
//! * `Parse` when text does not fit a date pattern.
//!
//! ## Quick Start
//! ```
//! use chrono::NaiveDate;
//! use sundry::{arithmetic, temporal, text, validation};
//!
//! assert_eq!(arithmetic::round(2.675, 2).unwrap(), 2.68);
//! assert_eq!(text::to_camel_case(Some("hello-world_test")).as_deref(), Some("helloWorldTest"));
//! let christmas = NaiveDate::from_ymd_opt(2023, 12, 25);
//! assert_eq!(temporal::format_date(christmas, Some("MMM dd, yyyy")).as_deref(), Some("Dec 25, 2023"));
//! assert!(validation::is_valid_email(Some("test@example.com")));
//! ```

pub mod arithmetic;
pub mod error;
pub mod pattern;
pub mod settings;
pub mod temporal;
pub mod text;
pub mod validation;

pub use error::{Result, SundryError};
pub use settings::Settings;
