//! Error types and error handling for the curricula search engine.
//!
//! Only caller contract violations are errors. "Nothing found"
//! conditions (empty query, no match above threshold, a record
//! missing a field) are represented as empty results instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for curricula operations
pub type Result<T> = std::result::Result<T, CurriculaError>;

/// Main error type for the curricula engine
#[derive(Error, Debug)]
pub enum CurriculaError {
    #[error("Unrecognized search mode: {0}")]
    UnrecognizedMode(String),

    #[error("Invalid field '{field}': not present in the catalog schema")]
    InvalidField {
        field: String,
        valid_fields: Vec<String>,
        suggestion: Option<String>,
    },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Malformed record at row {row}: {message}")]
    MalformedRecord { row: usize, message: String },

    #[error("Catalog not found: {0}")]
    CatalogNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CurriculaError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        match self {
            CurriculaError::InvalidField {
                suggestion: Some(s),
                ..
            } => format!("{self} (did you mean '{s}'?)"),
            _ => self.to_string(),
        }
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, CurriculaError::CatalogNotFound(_))
    }

    /// Check if this is a bad request error (invalid caller input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            CurriculaError::UnrecognizedMode(_)
                | CurriculaError::InvalidField { .. }
                | CurriculaError::InvalidQuery(_)
                | CurriculaError::ConfigError(_)
        )
    }
}
