//! Custom error types for Bachat
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Bachat operations
#[derive(Error, Debug)]
pub enum BachatError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors (settings file)
    #[error("JSON error: {0}")]
    Json(String),

    /// Expense-file storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for user-entered records
    #[error("Validation error: {0}")]
    Validation(String),

    /// No expense is selected for the requested action
    #[error("No expense is selected")]
    NoSelection,

    /// The requested index does not exist in the store
    #[error("Expense index {index} is out of range (store has {len})")]
    OutOfRange { index: usize, len: usize },

    /// The store holds no expenses
    #[error("There are no expenses")]
    EmptyStore,

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl BachatError {
    /// Create a validation error for a missing field
    pub fn empty_field(field: &'static str) -> Self {
        Self::Validation(format!("{} must not be empty", field))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a selection error (recoverable, store unchanged)
    pub fn is_selection(&self) -> bool {
        matches!(
            self,
            Self::NoSelection | Self::OutOfRange { .. } | Self::EmptyStore
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BachatError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BachatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Bachat operations
pub type BachatResult<T> = Result<T, BachatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BachatError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_empty_field_error() {
        let err = BachatError::empty_field("description");
        assert_eq!(
            err.to_string(),
            "Validation error: description must not be empty"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_selection_errors() {
        assert!(BachatError::NoSelection.is_selection());
        assert!(BachatError::EmptyStore.is_selection());
        assert!(BachatError::OutOfRange { index: 3, len: 1 }.is_selection());
        assert!(!BachatError::Validation("x".into()).is_selection());
    }

    #[test]
    fn test_out_of_range_display() {
        let err = BachatError::OutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "Expense index 5 is out of range (store has 2)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let bachat_err: BachatError = io_err.into();
        assert!(matches!(bachat_err, BachatError::Io(_)));
    }
}
