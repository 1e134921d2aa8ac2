//! User HTTP Handlers
//!
//! Every route here sits behind `auth_middleware`. Listing users only needs
//! a valid token; a user's profile and message history are visible to that
//! user alone.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendResult;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::{ReceivedMessage, SentMessage, UserDetail, UserSummary};

#[derive(Serialize, Deserialize, Debug)]
pub struct ListUsersResponse {
    pub users: Vec<UserSummary>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserResponse {
    pub user: UserDetail,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageHistoryResponse<T> {
    pub messages: Vec<T>,
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
) -> BackendResult<Json<ListUsersResponse>> {
    let users = state.users.all().await?;
    Ok(Json(ListUsersResponse { users }))
}

/// GET /users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(username): Path<String>,
) -> BackendResult<Json<UserResponse>> {
    user.ensure_is(&username)?;
    let user = state.users.get(&username).await?;
    Ok(Json(UserResponse { user }))
}

/// GET /users/{username}/to
pub async fn get_messages_to(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(username): Path<String>,
) -> BackendResult<Json<MessageHistoryResponse<ReceivedMessage>>> {
    user.ensure_is(&username)?;
    let messages = state.messages.messages_to(&username).await?;
    Ok(Json(MessageHistoryResponse { messages }))
}

/// GET /users/{username}/from
pub async fn get_messages_from(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(username): Path<String>,
) -> BackendResult<Json<MessageHistoryResponse<SentMessage>>> {
    user.ensure_is(&username)?;
    let messages = state.messages.messages_from(&username).await?;
    Ok(Json(MessageHistoryResponse { messages }))
}
