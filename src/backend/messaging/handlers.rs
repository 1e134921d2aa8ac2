//! Messaging HTTP Handlers
//!
//! Sending, reading and acknowledging single messages. All routes require a
//! logged-in user; a message is visible to its sender and recipient only,
//! and only the recipient may mark it read. To anyone else a message looks
//! exactly like one that does not exist.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::messaging::db::message_not_found;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::error::{require_non_empty, SharedError};
use crate::shared::{Message, MessageDetail, ReadReceipt};

/// Body of POST /messages
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SendMessageRequest {
    pub to_username: String,
    pub body: String,
}

impl SendMessageRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("to_username", &self.to_username)?;
        require_non_empty("body", &self.body)?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse<T> {
    pub message: T,
}

/// GET /messages/{id}
pub async fn get_message(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    id: Result<Path<i64>, PathRejection>,
) -> BackendResult<Json<MessageResponse<MessageDetail>>> {
    let Path(id) = id?;
    let message = state.messages.get(id).await?;

    if !message.involves(&user.username) {
        tracing::warn!("User {} tried to read message {}", user.username, id);
        return Err(message_not_found(id));
    }

    Ok(Json(MessageResponse { message }))
}

/// POST /messages
pub async fn send_message(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> BackendResult<Json<MessageResponse<Message>>> {
    let Json(request) = payload?;
    request.validate()?;

    let message = state
        .messages
        .create(&user.username, &request.to_username, &request.body)
        .await?;

    tracing::info!("Message {} sent from {} to {}", message.id, user.username, request.to_username);
    Ok(Json(MessageResponse { message }))
}

/// POST /messages/{id}/read
pub async fn mark_message_read(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    id: Result<Path<i64>, PathRejection>,
) -> BackendResult<Json<MessageResponse<ReadReceipt>>> {
    let Path(id) = id?;
    let message = state.messages.get(id).await?;

    if !message.involves(&user.username) {
        tracing::warn!("User {} tried to mark message {} read", user.username, id);
        return Err(message_not_found(id));
    }
    if message.to_user.username != user.username {
        tracing::warn!("Sender {} tried to mark message {} read", user.username, id);
        return Err(BackendError::forbidden("Only the recipient can mark a message read"));
    }

    let receipt = state.messages.mark_read(id).await?;
    Ok(Json(MessageResponse { message: receipt }))
}
