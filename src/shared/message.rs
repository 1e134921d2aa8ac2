//! Message Data Structures
//!
//! Views of the `messages` table. History queries attach the profile of the
//! other party (`SentMessage::to_user`, `ReceivedMessage::from_user`), while
//! `Message` is the bare row as created.
//!
//! # Serialization
//!
//! Timestamps serialize as RFC 3339 strings through chrono's serde support.
//! `read_at` is `null` until the recipient reads the message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::user::Counterpart;

/// A stored message without counterpart profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

/// A message in its sender's history, with the recipient's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessage {
    pub id: i64,
    pub to_user: Counterpart,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

/// A message in its recipient's history, with the sender's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedMessage {
    pub id: i64,
    pub from_user: Counterpart,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

/// A single message with both parties' profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDetail {
    pub id: i64,
    pub from_user: Counterpart,
    pub to_user: Counterpart,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

/// Result of marking a message read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ReadReceipt {
    pub id: i64,
    pub read_at: DateTime<Utc>,
}

impl MessageDetail {
    /// Whether `username` is the sender or the recipient
    pub fn involves(&self, username: &str) -> bool {
        self.from_user.username == username || self.to_user.username == username
    }
}
