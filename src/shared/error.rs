//! Shared Error Types
//!
//! This module defines error types for problems with client input. They are
//! independent of the HTTP stack so request types can validate themselves.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field is missing, empty, or otherwise unacceptable
//! - `MalformedRequest` - The body or a path parameter could not be decoded
//!
//! # Usage
//!
//! ```rust
//! use messagely::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "username is required");
//! assert!(error.to_string().contains("username"));
//! ```
use thiserror::Error;

/// Errors caused by client input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A field failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// The body or a path parameter did not decode to the expected shape
    #[error("Malformed request: {message}")]
    MalformedRequest {
        /// Decoder message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new malformed request error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }
}

/// Fail with a validation error if `value` is empty or only whitespace
pub fn require_non_empty(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, format!("{} is required", field)));
    }
    Ok(())
}
