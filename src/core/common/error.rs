use std::fmt;

use crate::core::indexing::range_tree::RangeTreeError;

#[derive(Debug)]
pub enum RangeIndexError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Configuration(String),
    Parsing { line: usize, message: String },
    InvalidInput { message: String },
    Index(RangeTreeError),
}

impl fmt::Display for RangeIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO Error: {e}"),
            Self::Json(e) => write!(f, "JSON Serialization Error: {e}"),
            Self::Configuration(s) => write!(f, "Configuration error: {s}"),
            Self::Parsing { line, message } => write!(f, "Parsing Error on line {line}: {message}"),
            Self::InvalidInput { message } => write!(f, "Invalid input: {message}"),
            Self::Index(e) => write!(f, "Index Error: {e}"),
        }
    }
}

impl std::error::Error for RangeIndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Index(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RangeIndexError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for RangeIndexError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<RangeTreeError> for RangeIndexError {
    fn from(err: RangeTreeError) -> Self {
        Self::Index(err)
    }
}

impl From<toml::de::Error> for RangeIndexError {
    fn from(err: toml::de::Error) -> Self {
        Self::Configuration(format!("invalid TOML: {err}"))
    }
}

impl RangeIndexError {
    /// Parsing error for the given 1-based input line.
    #[must_use]
    pub fn parsing(line: usize, message: impl Into<String>) -> Self {
        Self::Parsing { line, message: message.into() }
    }

    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }
}
