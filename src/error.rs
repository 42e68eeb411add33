//! Error types for the Labour Payment Engine.
//!
//! The payment and report calculations are total and never fail. These
//! errors cover the surrounding concerns: loading the report layout and
//! validating records before they are handed to the engine.

use thiserror::Error;

/// The main error type for the Labour Payment Engine.
///
/// # Example
///
/// ```
/// use labour_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/report.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/report.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A record failed validation before entering the engine.
    #[error("Invalid {record} field '{field}': {message}")]
    InvalidRecord {
        /// The kind of record (e.g. "contract", "attendance").
        record: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidRecord`].
    pub fn invalid_record(
        record: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        EngineError::InvalidRecord {
            record: record.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
