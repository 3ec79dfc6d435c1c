//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised when user input or local state cannot satisfy an operation.
///
/// Surfaced to the user once as a notification and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Nothing to export: {reason}")]
    EmptyExportTarget { reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an empty export target error.
    pub fn empty_export_target(reason: impl Into<String>) -> Self {
        ValidationError::EmptyExportTarget {
            reason: reason.into(),
        }
    }
}
