use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SundryError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Parse error: {message}")]
    Parse { message: String, position: Option<usize> },
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SundryError>;

impl SundryError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
    pub(crate) fn parse_at(message: impl Into<String>, position: usize) -> Self {
        Self::Parse { message: message.into(), position: Some(position) }
    }
}

// Helper conversions
impl From<config::ConfigError> for SundryError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
