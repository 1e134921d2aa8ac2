//! User projections
//!
//! The `users` table is never returned whole. Each operation returns the
//! narrowest projection it needs, and only `RegisteredUser` carries the
//! password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row returned by registration, including the stored bcrypt hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RegisteredUser {
    pub username: String,
    /// Bcrypt hash, never the plaintext
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Public profile of a user
///
/// Also attached to messages as the sender or recipient profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserSummary {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// The other party of a message
pub type Counterpart = UserSummary;

/// Profile plus account timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserDetail {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub join_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<RegisteredUser> for UserSummary {
    fn from(user: RegisteredUser) -> Self {
        Self {
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
        }
    }
}
