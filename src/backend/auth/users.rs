/**
 * User Store
 *
 * All reads and writes against the `users` table: registration, credential
 * checks, login timestamps, listing and lookup.
 *
 * Passwords are hashed with bcrypt at the work factor the store was
 * constructed with and verified with bcrypt's own comparison.
 *
 * A login for an unknown username is checked against a placeholder hash of
 * the same cost, so it takes as long as a wrong password for a real user.
 */

use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::error::{BackendError, BackendResult};
use crate::shared::{RegisteredUser, UserDetail, UserSummary};

/// Fields required to register a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    /// Plaintext, hashed before it reaches the database
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Hashed once per store to give unknown usernames a bcrypt check to fail
const PLACEHOLDER_PASSWORD: &str = "messagely-placeholder-password";

/// Data access for the `users` table
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
    bcrypt_cost: u32,
    placeholder_hash: String,
}

impl UserStore {
    /// Create a store over `pool` hashing with the given bcrypt cost
    ///
    /// # Errors
    ///
    /// * `PasswordHash` - if bcrypt rejects the cost
    pub fn new(pool: SqlitePool, bcrypt_cost: u32) -> BackendResult<Self> {
        let placeholder_hash = bcrypt::hash(PLACEHOLDER_PASSWORD, bcrypt_cost)?;
        Ok(Self {
            pool,
            bcrypt_cost,
            placeholder_hash,
        })
    }

    /// Register a new user
    ///
    /// Both `join_at` and `last_login_at` are set to the current time.
    ///
    /// # Errors
    ///
    /// * `UsernameTaken` - if the username is already registered
    pub async fn register(&self, new_user: NewUser) -> BackendResult<RegisteredUser> {
        let password_hash = bcrypt::hash(&new_user.password, self.bcrypt_cost)?;
        let now = Utc::now();

        let user = sqlx::query_as::<_, RegisteredUser>(
            r#"
            INSERT INTO users (username, password, first_name, last_name, phone, join_at, last_login_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING username, password, first_name, last_name, phone
            "#,
        )
        .bind(&new_user.username)
        .bind(&password_hash)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.phone)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => BackendError::UsernameTaken {
                username: new_user.username.clone(),
            },
            _ => BackendError::Database(e),
        })?;

        tracing::info!("Registered user {}", user.username);
        Ok(user)
    }

    /// Check a username/password pair
    ///
    /// Succeeds only when the user exists and the password matches its hash.
    /// Both failure cases run one bcrypt verification at the store's cost.
    ///
    /// # Errors
    ///
    /// * `InvalidCredentials` - for an unknown user and for a wrong password alike
    pub async fn authenticate(&self, username: &str, password: &str) -> BackendResult<()> {
        let stored: Option<(String,)> = sqlx::query_as("SELECT password FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        let Some((password_hash,)) = stored else {
            tracing::warn!("Login attempt for unknown user");
            bcrypt::verify(password, &self.placeholder_hash)?;
            return Err(BackendError::InvalidCredentials);
        };

        if bcrypt::verify(password, &password_hash)? {
            Ok(())
        } else {
            tracing::warn!("Invalid password for user: {}", username);
            Err(BackendError::InvalidCredentials)
        }
    }

    /// Set `last_login_at` to now
    ///
    /// # Errors
    ///
    /// * `NotFound` - if no row was updated
    pub async fn update_login_timestamp(&self, username: &str) -> BackendResult<()> {
        let result = sqlx::query("UPDATE users SET last_login_at = ? WHERE username = ?")
            .bind(Utc::now())
            .bind(username)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(username));
        }
        Ok(())
    }

    /// Basic info on all users, ordered by username
    pub async fn all(&self) -> BackendResult<Vec<UserSummary>> {
        let users = sqlx::query_as::<_, UserSummary>(
            "SELECT username, first_name, last_name, phone FROM users ORDER BY username",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Get a user by username
    ///
    /// # Errors
    ///
    /// * `NotFound` - if the user does not exist
    pub async fn get(&self, username: &str) -> BackendResult<UserDetail> {
        sqlx::query_as::<_, UserDetail>(
            r#"
            SELECT username, first_name, last_name, phone, join_at, last_login_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| user_not_found(username))
    }

    /// Whether a user with this username exists
    pub async fn exists(&self, username: &str) -> BackendResult<bool> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}

fn user_not_found(username: &str) -> BackendError {
    BackendError::not_found(format!("User not found: {}", username))
}
