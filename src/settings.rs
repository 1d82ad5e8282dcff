//! Configurable defaults.
//!
//! A [`Settings`] value carries the patterns used when a caller does not want
//! to spell one out each time, plus the log filter for
//! [`Settings::init_tracing`]. Settings come from TOML, either a file or a
//! string, and any key left out keeps its default:
//!
//! ```toml
//! date_pattern = "dd/MM/yyyy"
//! date_time_pattern = "dd/MM/yyyy HH:mm"
//! log_filter = "sundry=debug"
//! ```

use std::path::Path;

use config::{Config, File, FileFormat};
use serde::Deserialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{Result, SundryError};
use crate::pattern::Pattern;
use crate::temporal;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub date_pattern: String,
    pub date_time_pattern: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            date_pattern: temporal::ISO_DATE.to_string(),
            date_time_pattern: "yyyy-MM-dd HH:mm:ss".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Reads settings from a TOML file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Settings> {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Settings::default());
        }
        let source = File::from(path).format(FileFormat::Toml);
        let settings = Self::build(Config::builder().add_source(source).build()?)?;
        debug!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    pub fn from_toml(toml: &str) -> Result<Settings> {
        let source = File::from_str(toml, FileFormat::Toml);
        let settings = Self::build(Config::builder().add_source(source).build()?)?;
        debug!(?settings, "settings read from string");
        Ok(settings)
    }

    fn build(config: Config) -> Result<Settings> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if !Pattern::compile(&self.date_pattern).has_date_fields() {
            return Err(SundryError::Config(format!(
                "date_pattern '{}' needs year, month and day",
                self.date_pattern
            )));
        }
        let date_time = Pattern::compile(&self.date_time_pattern);
        if !date_time.has_date_fields() || !date_time.has_time_fields() {
            return Err(SundryError::Config(format!(
                "date_time_pattern '{}' needs year, month, day and hour",
                self.date_time_pattern
            )));
        }
        EnvFilter::try_new(&self.log_filter)
            .map_err(|e| SundryError::Config(format!("log_filter '{}': {}", self.log_filter, e)))?;
        Ok(())
    }

    /// Installs a global fmt subscriber filtered by `log_filter`. Fails if a
    /// subscriber is already in place.
    pub fn init_tracing(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.log_filter)
            .map_err(|e| SundryError::Config(e.to_string()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| SundryError::Config(e.to_string()))
    }

    pub fn format_date(&self, date: Option<NaiveDate>) -> Option<String> {
        temporal::format_date(date, Some(&self.date_pattern))
    }

    pub fn format_date_time(&self, moment: Option<NaiveDateTime>) -> Option<String> {
        temporal::format_date_time(moment, Some(&self.date_time_pattern))
    }

    pub fn parse_date(&self, text: Option<&str>) -> Result<Option<NaiveDate>> {
        temporal::parse_date(text, Some(&self.date_pattern))
    }

    pub fn parse_date_time(&self, text: Option<&str>) -> Result<Option<NaiveDateTime>> {
        temporal::parse_date_time(text, Some(&self.date_time_pattern))
    }
}
