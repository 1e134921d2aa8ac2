/**
 * Backend Error Types
 *
 * This module defines the error type returned by the stores and by the HTTP
 * handlers. Every failure a caller can observe is a variant here, so the
 * mapping to an HTTP status lives in one place.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - Validation of request bodies (`Shared`)
 * - Duplicate usernames (`UsernameTaken`)
 * - Bad login (`InvalidCredentials`)
 * - Missing or invalid bearer tokens (`Unauthorized`)
 * - Acting on another user's data (`Forbidden`)
 * - Unknown users or messages (`NotFound`)
 *
 * ## Server Errors
 *
 * - Store failures (`Database`)
 * - Hashing failures (`PasswordHash`)
 * - Token signing failures (`Token`)
 *
 * Server errors keep their source for logging but never expose it in the
 * response body.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use messagely::backend::error::BackendError;
///
/// let err = BackendError::not_found("User not found: alice");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Invalid client input
    #[error(transparent)]
    Shared(#[from] SharedError),

    /// The username is already registered
    #[error("Username already taken: {username}")]
    UsernameTaken {
        /// The duplicate username
        username: String,
    },

    /// Unknown user or wrong password, reported identically
    #[error("Invalid username/password")]
    InvalidCredentials,

    /// Missing or invalid bearer token
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Authenticated, but not allowed to act on this resource
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Lookup of a user or message that does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Bcrypt failure
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// JWT signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl BackendError {
    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Shared` - 400 Bad Request
    /// - `UsernameTaken` - 409 Conflict
    /// - `InvalidCredentials`, `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Database`, `PasswordHash`, `Token` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Shared(_) => StatusCode::BAD_REQUEST,
            Self::UsernameTaken { .. } => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message that is safe to return to clients
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Whether this is a server-side failure
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}
