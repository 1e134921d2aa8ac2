/**
 * Register Handler
 *
 * POST /register
 *
 * # Registration Process
 *
 * 1. Reject empty fields
 * 2. Hash the password and create the user
 * 3. Update `last_login_at`, since registering also logs the user in
 * 4. Return a signed token for the new username
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{RegisterRequest, TokenResponse};
use crate::backend::error::BackendResult;
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - If a field is missing or empty
/// * `409 Conflict` - If the username is already taken
/// * `500 Internal Server Error` - If the database, hashing or signing fails
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "password123",
///   "first_name": "Alice",
///   "last_name": "Liddell",
///   "phone": "+15550100"
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> BackendResult<Json<TokenResponse>> {
    let Json(request) = payload?;
    tracing::info!("Register request for username: {}", request.username);

    request.validate().map_err(|e| {
        tracing::warn!("Rejected registration: {}", e);
        e
    })?;

    let user = state.users.register(request.into()).await?;
    state.users.update_login_timestamp(&user.username).await?;
    let token = state.sessions.create_token(&user.username)?;

    Ok(Json(TokenResponse { token }))
}
