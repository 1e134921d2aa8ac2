//! User store integration tests
//!
//! Registration, credential checks, login timestamps, listing and lookup
//! against a migrated in-memory database.

use std::time::{Duration, Instant};

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use messagely::backend::{BackendError, UserStore};

use crate::common::{new_user, TestDatabase, TEST_PASSWORD};

#[tokio::test]
async fn test_register_returns_stored_fields() {
    let db = TestDatabase::new().await;

    let user = db.users().register(new_user("alice")).await.unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.first_name, "alice-first");
    assert_eq!(user.last_name, "alice-last");
    assert_ne!(user.password, TEST_PASSWORD, "Password must be stored hashed");
    assert!(bcrypt::verify(TEST_PASSWORD, &user.password).unwrap());
}

#[tokio::test]
async fn test_register_sets_join_and_login_timestamps() {
    let db = TestDatabase::new().await;
    let users = db.users();

    users.register(new_user("alice")).await.unwrap();
    let detail = users.get("alice").await.unwrap();

    assert_eq!(detail.last_login_at, Some(detail.join_at));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let db = TestDatabase::new().await;
    let users = db.users();

    users.register(new_user("alice")).await.unwrap();
    let result = users.register(new_user("alice")).await;

    assert_matches!(result, Err(BackendError::UsernameTaken { username }) if username == "alice");
}

#[tokio::test]
async fn test_authenticate_after_register() {
    let db = TestDatabase::new().await;
    let users = db.users();

    users.register(new_user("alice")).await.unwrap();

    assert_matches!(users.authenticate("alice", TEST_PASSWORD).await, Ok(()));
}

#[tokio::test]
async fn test_authenticate_wrong_password() {
    let db = TestDatabase::new().await;
    let users = db.users();

    users.register(new_user("alice")).await.unwrap();

    assert_matches!(
        users.authenticate("alice", "not-the-password").await,
        Err(BackendError::InvalidCredentials)
    );
}

#[tokio::test]
async fn test_authenticate_unknown_user() {
    let db = TestDatabase::new().await;

    assert_matches!(
        db.users().authenticate("nobody", TEST_PASSWORD).await,
        Err(BackendError::InvalidCredentials)
    );
}

#[tokio::test]
async fn test_authenticate_unknown_user_costs_a_bcrypt_check() {
    let db = TestDatabase::new().await;
    let users = UserStore::new(db.pool().clone(), 8).unwrap();
    users.register(new_user("alice")).await.unwrap();

    let started = Instant::now();
    let wrong_password = users.authenticate("alice", "not-the-password").await;
    let known_elapsed = started.elapsed();

    let started = Instant::now();
    let unknown_user = users.authenticate("nobody", "not-the-password").await;
    let unknown_elapsed = started.elapsed();

    assert_matches!(wrong_password, Err(BackendError::InvalidCredentials));
    assert_matches!(unknown_user, Err(BackendError::InvalidCredentials));
    assert!(
        unknown_elapsed * 4 >= known_elapsed,
        "unknown user took {:?}, wrong password took {:?}",
        unknown_elapsed,
        known_elapsed
    );
}

#[tokio::test]
async fn test_update_login_timestamp_moves_forward() {
    let db = TestDatabase::new().await;
    let users = db.users();

    users.register(new_user("alice")).await.unwrap();
    let before = users.get("alice").await.unwrap().last_login_at.unwrap();

    tokio::time::sleep(Duration::from_millis(10)).await;
    users.update_login_timestamp("alice").await.unwrap();
    let after = users.get("alice").await.unwrap();

    assert!(after.last_login_at.unwrap() > before);
    assert!(after.join_at < after.last_login_at.unwrap());
}

#[tokio::test]
async fn test_update_login_timestamp_unknown_user() {
    let db = TestDatabase::new().await;

    assert_matches!(
        db.users().update_login_timestamp("nobody").await,
        Err(BackendError::NotFound { .. })
    );
}

#[tokio::test]
async fn test_all_lists_every_user_without_passwords() {
    let db = TestDatabase::new().await;
    let users = db.users();

    users.register(new_user("carol")).await.unwrap();
    users.register(new_user("alice")).await.unwrap();
    users.register(new_user("bob")).await.unwrap();

    let all = users.all().await.unwrap();
    let names: Vec<&str> = all.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);

    let json = serde_json::to_value(&all).unwrap();
    for user in json.as_array().unwrap() {
        assert!(user.get("password").is_none());
        assert!(user.get("join_at").is_none());
    }
}

#[tokio::test]
async fn test_all_empty() {
    let db = TestDatabase::new().await;

    assert!(db.users().all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_returns_profile() {
    let db = TestDatabase::new().await;
    let users = db.users();

    users.register(new_user("alice")).await.unwrap();
    let detail = users.get("alice").await.unwrap();

    assert_eq!(detail.username, "alice");
    assert_eq!(detail.first_name, "alice-first");
    assert_eq!(detail.last_name, "alice-last");
    assert_eq!(detail.phone, new_user("alice").phone);
}

#[tokio::test]
async fn test_get_unknown_user() {
    let db = TestDatabase::new().await;

    assert_matches!(
        db.users().get("nonexistent").await,
        Err(BackendError::NotFound { .. })
    );
}

#[tokio::test]
async fn test_exists() {
    let db = TestDatabase::new().await;
    let users = db.users();

    users.register(new_user("alice")).await.unwrap();

    assert!(users.exists("alice").await.unwrap());
    assert!(!users.exists("bob").await.unwrap());
}
