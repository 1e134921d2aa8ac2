//! Authentication test helpers
//!
//! Utilities for creating test users, issuing tokens and building the
//! `Authorization` header.

use axum::http::header::{HeaderName, HeaderValue, AUTHORIZATION};

use messagely::backend::auth::{NewUser, SessionKeys};
use messagely::backend::UserStore;

use super::database::test_config;

/// Password given to every user created by these helpers
pub const TEST_PASSWORD: &str = "password123";

/// Test user credentials
pub struct TestUser {
    pub username: String,
    pub password: String,
    pub token: String,
}

/// Registration input for `username` with predictable profile fields
pub fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: TEST_PASSWORD.to_string(),
        first_name: format!("{}-first", username),
        last_name: format!("{}-last", username),
        phone: format!("+1555{:0>4}", username.len()),
    }
}

/// Create a test user in the database and issue a token for it
pub async fn create_test_user(users: &UserStore, username: &str) -> TestUser {
    users
        .register(new_user(username))
        .await
        .expect("Failed to register test user");

    TestUser {
        username: username.to_string(),
        password: TEST_PASSWORD.to_string(),
        token: test_token(username),
    }
}

/// Generate a test JWT token signed with the test secret
pub fn test_token(username: &str) -> String {
    SessionKeys::from_config(&test_config())
        .create_token(username)
        .expect("Failed to create test token")
}

/// `Authorization: Bearer <token>` header
pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    let value = HeaderValue::from_str(&format!("Bearer {}", token))
        .expect("Token should be a valid header value");
    (AUTHORIZATION, value)
}
