//! Database operations for messaging
//!
//! Message histories join `messages` against `users` so each entry carries the
//! profile of the other party. Creation, single-message lookup and read
//! receipts live here too.

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::backend::error::{BackendError, BackendResult};
use crate::shared::{Counterpart, Message, MessageDetail, ReadReceipt, ReceivedMessage, SentMessage};

/// Data access for the `messages` table
#[derive(Clone)]
pub struct MessageStore {
    pool: SqlitePool,
}

impl MessageStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Messages sent by `username`, each with the recipient's profile
    ///
    /// A user with no sent messages gets an empty list.
    ///
    /// # Errors
    ///
    /// * `NotFound` - if `username` is not a registered user
    pub async fn messages_from(&self, username: &str) -> BackendResult<Vec<SentMessage>> {
        let rows = sqlx::query(
            r#"
            SELECT m.id, m.to_user, u.first_name, u.last_name, u.phone,
                   m.body, m.sent_at, m.read_at
            FROM messages AS m
            JOIN users AS u ON m.to_user = u.username
            WHERE m.from_user = ?
            ORDER BY m.id
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            self.ensure_user(username).await?;
        }

        rows.iter()
            .map(|row| -> BackendResult<SentMessage> {
                Ok(SentMessage {
                    id: row.try_get("id")?,
                    to_user: counterpart(row, "to_user", "")?,
                    body: row.try_get("body")?,
                    sent_at: row.try_get("sent_at")?,
                    read_at: row.try_get("read_at")?,
                })
            })
            .collect()
    }

    /// Messages received by `username`, each with the sender's profile
    ///
    /// # Errors
    ///
    /// * `NotFound` - if `username` is not a registered user
    pub async fn messages_to(&self, username: &str) -> BackendResult<Vec<ReceivedMessage>> {
        let rows = sqlx::query(
            r#"
            SELECT m.id, m.from_user, u.first_name, u.last_name, u.phone,
                   m.body, m.sent_at, m.read_at
            FROM messages AS m
            JOIN users AS u ON m.from_user = u.username
            WHERE m.to_user = ?
            ORDER BY m.id
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            self.ensure_user(username).await?;
        }

        rows.iter()
            .map(|row| -> BackendResult<ReceivedMessage> {
                Ok(ReceivedMessage {
                    id: row.try_get("id")?,
                    from_user: counterpart(row, "from_user", "")?,
                    body: row.try_get("body")?,
                    sent_at: row.try_get("sent_at")?,
                    read_at: row.try_get("read_at")?,
                })
            })
            .collect()
    }

    /// Store a new, unread message
    ///
    /// # Errors
    ///
    /// * `NotFound` - if either username is not a registered user
    pub async fn create(&self, from_username: &str, to_username: &str, body: &str) -> BackendResult<Message> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (from_user, to_user, body, sent_at, read_at)
            VALUES (?, ?, ?, ?, NULL)
            RETURNING id, from_user AS from_username, to_user AS to_username, body, sent_at, read_at
            "#,
        )
        .bind(from_username)
        .bind(to_username)
        .bind(body)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                BackendError::not_found(format!("User not found: {}", to_username))
            }
            _ => BackendError::Database(e),
        })?;

        tracing::debug!("Stored message {} from {} to {}", message.id, from_username, to_username);
        Ok(message)
    }

    /// A single message with both profiles
    ///
    /// # Errors
    ///
    /// * `NotFound` - if there is no message with this id
    pub async fn get(&self, id: i64) -> BackendResult<MessageDetail> {
        let row = sqlx::query(
            r#"
            SELECT m.id, m.body, m.sent_at, m.read_at,
                   m.from_user,
                   f.first_name AS from_first_name,
                   f.last_name AS from_last_name,
                   f.phone AS from_phone,
                   m.to_user,
                   t.first_name AS to_first_name,
                   t.last_name AS to_last_name,
                   t.phone AS to_phone
            FROM messages AS m
            JOIN users AS f ON m.from_user = f.username
            JOIN users AS t ON m.to_user = t.username
            WHERE m.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| message_not_found(id))?;

        Ok(MessageDetail {
            id: row.try_get("id")?,
            from_user: counterpart(&row, "from_user", "from_")?,
            to_user: counterpart(&row, "to_user", "to_")?,
            body: row.try_get("body")?,
            sent_at: row.try_get("sent_at")?,
            read_at: row.try_get("read_at")?,
        })
    }

    /// Set `read_at` to now
    ///
    /// # Errors
    ///
    /// * `NotFound` - if there is no message with this id
    pub async fn mark_read(&self, id: i64) -> BackendResult<ReadReceipt> {
        sqlx::query_as::<_, ReadReceipt>(
            "UPDATE messages SET read_at = ? WHERE id = ? RETURNING id, read_at",
        )
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| message_not_found(id))
    }

    async fn ensure_user(&self, username: &str) -> BackendResult<()> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;

        if count == 0 {
            return Err(BackendError::not_found(format!("User not found: {}", username)));
        }
        Ok(())
    }
}

/// Build a profile from a joined row
///
/// `username_column` names the message column holding the username; the
/// profile columns are `first_name`, `last_name` and `phone` behind `prefix`.
fn counterpart(row: &SqliteRow, username_column: &str, prefix: &str) -> Result<Counterpart, sqlx::Error> {
    Ok(Counterpart {
        username: row.try_get(username_column)?,
        first_name: row.try_get(format!("{}first_name", prefix).as_str())?,
        last_name: row.try_get(format!("{}last_name", prefix).as_str())?,
        phone: row.try_get(format!("{}phone", prefix).as_str())?,
    })
}

pub(crate) fn message_not_found(id: i64) -> BackendError {
    BackendError::not_found(format!("Message not found: {}", id))
}
