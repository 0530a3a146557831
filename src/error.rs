//! Custom error types for the expense tracker
//!
//! This module defines the crate-level error type using thiserror. Model-level
//! validation errors live next to their models and convert into
//! [`TrackerError`] at the service boundary.

use thiserror::Error;

use crate::models::ExpenseValidationError;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for expenses
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors (ledger files)
    #[error("Storage error: {0}")]
    Storage(String),

    /// A filename rejected by the allow-list
    #[error("Invalid filename: {0} (expected letters, digits, '.', '_' or '-' ending in .txt or .csv)")]
    InvalidFilename(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Positional delete outside the ledger
    #[error("Index {index} is out of range (ledger has {len} expenses)")]
    IndexOutOfRange { index: i64, len: usize },
}

impl TrackerError {
    /// Create a "not found" error for ledger files
    pub fn file_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "File",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<ExpenseValidationError> for TrackerError {
    fn from(err: ExpenseValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = TrackerError::file_not_found("march.csv");
        assert_eq!(err.to_string(), "File not found: march.csv");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_index_out_of_range_error() {
        let err = TrackerError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Index 7 is out of range (ledger has 3 expenses)"
        );
    }

    #[test]
    fn test_from_validation_error() {
        let err: TrackerError = ExpenseValidationError::EmptyCategory.into();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Category cannot be empty"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tracker_err: TrackerError = io_err.into();
        assert!(matches!(tracker_err, TrackerError::Io(_)));
    }
}
