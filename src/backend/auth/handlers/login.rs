/**
 * Login Handler
 *
 * POST /login
 *
 * # Authentication Process
 *
 * 1. Verify the password against the stored bcrypt hash
 * 2. Update `last_login_at`
 * 3. Return a signed token for the username
 *
 * # Security
 *
 * - An unknown username and a wrong password produce the same 401 response
 * - Passwords are never logged or returned in responses
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::error::BackendResult;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body is not a login request
/// * `401 Unauthorized` - If the user is not found or the password is incorrect
/// * `500 Internal Server Error` - If the database, hashing or signing fails
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "password123"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."}
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> BackendResult<Json<TokenResponse>> {
    let Json(request) = payload?;
    tracing::info!("Login request for: {}", request.username);

    state.users.authenticate(&request.username, &request.password).await?;
    state.users.update_login_timestamp(&request.username).await?;
    let token = state.sessions.create_token(&request.username)?;

    tracing::info!("User logged in successfully: {}", request.username);
    Ok(Json(TokenResponse { token }))
}
