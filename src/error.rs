//! Custom error types for duit
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for duit operations
#[derive(Error, Debug)]
pub enum DuitError {
    /// Configuration-related errors (path resolution, directory creation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage errors (the ledger file could not be written)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for transaction input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DuitError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for DuitError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for DuitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for duit operations
pub type DuitResult<T> = Result<T, DuitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DuitError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_error() {
        let err = DuitError::Validation("amount must not be negative".into());
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: amount must not be negative"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let duit_err: DuitError = io_err.into();
        assert!(matches!(duit_err, DuitError::Storage(_)));
    }
}
