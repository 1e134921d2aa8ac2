/**
 * Authentication Handler Types
 *
 * Request and response bodies for `/login` and `/register`.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::NewUser;
use crate::shared::error::{require_non_empty, SharedError};

/// Registration request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    /// Plaintext password, hashed before storage
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl RegisterRequest {
    /// Reject empty fields and usernames with surrounding whitespace
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("username", &self.username)?;
        if self.username.trim() != self.username {
            return Err(SharedError::validation(
                "username",
                "username must not start or end with whitespace",
            ));
        }
        require_non_empty("password", &self.password)?;
        require_non_empty("first_name", &self.first_name)?;
        require_non_empty("last_name", &self.last_name)?;
        require_non_empty("phone", &self.phone)?;
        Ok(())
    }
}

impl From<RegisterRequest> for NewUser {
    fn from(request: RegisterRequest) -> Self {
        Self {
            username: request.username,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
        }
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Returned by both login and registration
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    /// Signed JWT carrying the `username` claim
    pub token: String,
}
