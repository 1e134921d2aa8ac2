//! Message store integration tests

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use messagely::backend::BackendError;

use crate::common::{new_user, TestDatabase};

async fn seeded() -> TestDatabase {
    let db = TestDatabase::new().await;
    let users = db.users();
    for name in ["alice", "bob", "carol"] {
        users.register(new_user(name)).await.unwrap();
    }
    db
}

#[tokio::test]
async fn test_create_message_is_unread() {
    let db = seeded().await;

    let message = db.messages().create("alice", "bob", "hello").await.unwrap();

    assert_eq!(message.from_username, "alice");
    assert_eq!(message.to_username, "bob");
    assert_eq!(message.body, "hello");
    assert!(message.read_at.is_none());
}

#[tokio::test]
async fn test_create_message_to_unknown_user() {
    let db = seeded().await;

    assert_matches!(
        db.messages().create("alice", "nobody", "hello").await,
        Err(BackendError::NotFound { .. })
    );
}

#[tokio::test]
async fn test_messages_from_carries_recipient_profile() {
    let db = seeded().await;
    let messages = db.messages();

    messages.create("alice", "bob", "first").await.unwrap();
    messages.create("alice", "carol", "second").await.unwrap();
    messages.create("bob", "alice", "reply").await.unwrap();

    let sent = messages.messages_from("alice").await.unwrap();

    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to_user.username, "bob");
    assert_eq!(sent[0].to_user.first_name, "bob-first");
    assert_eq!(sent[0].to_user.last_name, "bob-last");
    assert_eq!(sent[0].to_user.phone, new_user("bob").phone);
    assert_eq!(sent[0].body, "first");
    assert_eq!(sent[1].to_user.username, "carol");
    assert_eq!(sent[1].body, "second");
}

#[tokio::test]
async fn test_messages_to_carries_sender_profile() {
    let db = seeded().await;
    let messages = db.messages();

    messages.create("bob", "alice", "from bob").await.unwrap();
    messages.create("carol", "alice", "from carol").await.unwrap();
    messages.create("alice", "bob", "not for alice").await.unwrap();

    let received = messages.messages_to("alice").await.unwrap();

    assert_eq!(received.len(), 2);
    assert_eq!(received[0].from_user.username, "bob");
    assert_eq!(received[0].from_user.first_name, "bob-first");
    assert_eq!(received[0].body, "from bob");
    assert_eq!(received[1].from_user.username, "carol");
    assert_eq!(received[1].body, "from carol");
}

#[tokio::test]
async fn test_message_appears_once_on_each_side() {
    let db = seeded().await;
    let messages = db.messages();

    let created = messages.create("alice", "bob", "hi bob").await.unwrap();

    let sent = messages.messages_from("alice").await.unwrap();
    let received = messages.messages_to("bob").await.unwrap();

    assert_eq!(sent.iter().filter(|m| m.id == created.id).count(), 1);
    assert_eq!(received.iter().filter(|m| m.id == created.id).count(), 1);

    assert_eq!(sent[0].body, received[0].body);
    assert_eq!(sent[0].sent_at, received[0].sent_at);
    assert_eq!(sent[0].sent_at, created.sent_at);
    assert_eq!(received[0].from_user.username, "alice");
    assert_eq!(sent[0].to_user.username, "bob");
}

#[tokio::test]
async fn test_message_to_self() {
    let db = seeded().await;
    let messages = db.messages();

    messages.create("alice", "alice", "note to self").await.unwrap();

    assert_eq!(messages.messages_from("alice").await.unwrap().len(), 1);
    assert_eq!(messages.messages_to("alice").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_history_for_known_user() {
    let db = seeded().await;
    let messages = db.messages();

    assert!(messages.messages_from("carol").await.unwrap().is_empty());
    assert!(messages.messages_to("carol").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_history_for_unknown_user() {
    let db = seeded().await;
    let messages = db.messages();

    assert_matches!(
        messages.messages_from("nobody").await,
        Err(BackendError::NotFound { .. })
    );
    assert_matches!(
        messages.messages_to("nobody").await,
        Err(BackendError::NotFound { .. })
    );
}

#[tokio::test]
async fn test_get_message_with_both_profiles() {
    let db = seeded().await;
    let messages = db.messages();

    let created = messages.create("alice", "bob", "hello").await.unwrap();
    let detail = messages.get(created.id).await.unwrap();

    assert_eq!(detail.id, created.id);
    assert_eq!(detail.from_user.username, "alice");
    assert_eq!(detail.from_user.first_name, "alice-first");
    assert_eq!(detail.to_user.username, "bob");
    assert_eq!(detail.to_user.last_name, "bob-last");
    assert!(detail.involves("alice"));
    assert!(detail.involves("bob"));
    assert!(!detail.involves("carol"));
}

#[tokio::test]
async fn test_get_unknown_message() {
    let db = seeded().await;

    assert_matches!(db.messages().get(999).await, Err(BackendError::NotFound { .. }));
}

#[tokio::test]
async fn test_mark_read_shows_in_history() {
    let db = seeded().await;
    let messages = db.messages();

    let created = messages.create("alice", "bob", "hello").await.unwrap();
    let receipt = messages.mark_read(created.id).await.unwrap();

    assert_eq!(receipt.id, created.id);
    assert!(receipt.read_at >= created.sent_at);

    let received = messages.messages_to("bob").await.unwrap();
    assert_eq!(received[0].read_at, Some(receipt.read_at));
    let sent = messages.messages_from("alice").await.unwrap();
    assert_eq!(sent[0].read_at, Some(receipt.read_at));
}

#[tokio::test]
async fn test_mark_read_unknown_message() {
    let db = seeded().await;

    assert_matches!(
        db.messages().mark_read(42).await,
        Err(BackendError::NotFound { .. })
    );
}
