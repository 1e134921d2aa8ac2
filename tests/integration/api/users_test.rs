//! User API integration tests
//!
//! Listing users, profiles and message histories over HTTP.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{assert_error_response, assert_json_status, bearer, create_test_user, TestDatabase};

#[tokio::test]
async fn test_list_users() {
    let db = TestDatabase::new().await;
    let server = db.server();
    let alice = create_test_user(&db.users(), "alice").await;
    create_test_user(&db.users(), "bob").await;

    let (name, value) = bearer(&alice.token);
    let response = server.get("/users").add_header(name, value).await;

    let body = assert_json_status(&response, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["username"], "alice");
    assert_eq!(users[1]["username"], "bob");
    assert!(users.iter().all(|u| u.get("password").is_none()));
}

#[tokio::test]
async fn test_get_own_profile() {
    let db = TestDatabase::new().await;
    let server = db.server();
    let alice = create_test_user(&db.users(), "alice").await;

    let (name, value) = bearer(&alice.token);
    let response = server.get("/users/alice").add_header(name, value).await;

    let body = assert_json_status(&response, StatusCode::OK);
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["first_name"], "alice-first");
    assert!(body["user"]["join_at"].is_string());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_get_other_profile_forbidden() {
    let db = TestDatabase::new().await;
    let server = db.server();
    let alice = create_test_user(&db.users(), "alice").await;
    create_test_user(&db.users(), "bob").await;

    let (name, value) = bearer(&alice.token);
    let response = server.get("/users/bob").add_header(name, value).await;

    assert_error_response(&response, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_message_histories() {
    let db = TestDatabase::new().await;
    let server = db.server();
    let alice = create_test_user(&db.users(), "alice").await;
    let bob = create_test_user(&db.users(), "bob").await;

    db.messages().create("alice", "bob", "hi bob").await.unwrap();
    db.messages().create("bob", "alice", "hi alice").await.unwrap();

    let (name, value) = bearer(&alice.token);
    let response = server.get("/users/alice/from").add_header(name, value).await;
    let body = assert_json_status(&response, StatusCode::OK);
    let sent = body["messages"].as_array().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0]["to_user"]["username"], "bob");
    assert_eq!(sent[0]["body"], "hi bob");

    let (name, value) = bearer(&bob.token);
    let response = server.get("/users/bob/to").add_header(name, value).await;
    let body = assert_json_status(&response, StatusCode::OK);
    let received = body["messages"].as_array().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["from_user"]["username"], "alice");
    assert_eq!(received[0]["from_user"]["first_name"], "alice-first");
    assert!(received[0]["read_at"].is_null());
}

#[tokio::test]
async fn test_empty_history() {
    let db = TestDatabase::new().await;
    let server = db.server();
    let alice = create_test_user(&db.users(), "alice").await;

    let (name, value) = bearer(&alice.token);
    let response = server.get("/users/alice/to").add_header(name, value).await;

    let body = assert_json_status(&response, StatusCode::OK);
    assert_eq!(body["messages"], serde_json::json!([]));
}

#[tokio::test]
async fn test_other_users_history_forbidden() {
    let db = TestDatabase::new().await;
    let server = db.server();
    let alice = create_test_user(&db.users(), "alice").await;
    create_test_user(&db.users(), "bob").await;

    let (name, value) = bearer(&alice.token);
    let response = server.get("/users/bob/from").add_header(name, value).await;

    assert_error_response(&response, StatusCode::FORBIDDEN);
}
