//! Version record error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or checking a version record
#[derive(Debug, Error)]
pub enum RecordError {
    /// A required field was not supplied by the version source
    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    /// A field was supplied but does not hold a usable value
    #[error("Invalid value for '{field}': {value} (expected a non-negative integer)")]
    InvalidField { field: &'static str, value: String },

    /// The version source could not be read
    #[error("Failed to read version source {shown}: {source}", shown = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML version source could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Candidate string differs from the canonical display string
    #[error("Version does not match: expected {expected}, got {actual}")]
    Mismatch { expected: String, actual: String },
}

/// Type alias for record results
pub type Result<T> = std::result::Result<T, RecordError>;
