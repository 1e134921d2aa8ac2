/**
 * Authentication Middleware
 *
 * This module protects routes that require a logged-in user. It extracts
 * and verifies the JWT from the Authorization header and hands the username
 * to handlers through request extensions.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

impl AuthenticatedUser {
    /// Fail with `Forbidden` unless this is `username`
    pub fn ensure_is(&self, username: &str) -> BackendResult<()> {
        if self.username == username {
            Ok(())
        } else {
            tracing::warn!("User {} tried to act as {}", self.username, username);
            Err(BackendError::forbidden(format!("Not allowed to access {}", username)))
        }
    }
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts JWT token from Authorization header
/// 2. Verifies the token
/// 3. Checks the user in the `username` claim still exists
/// 4. Attaches user data to request extensions for use in handlers
///
/// Returns 401 Unauthorized if token is missing or invalid
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers().get(AUTHORIZATION).and_then(|h| h.to_str().ok()))?;

    let claims = app_state.sessions.verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::unauthorized("Invalid token")
    })?;

    if !app_state.users.exists(&claims.username).await? {
        tracing::warn!("Token for unknown user: {}", claims.username);
        return Err(BackendError::unauthorized("Invalid token"));
    }

    request.extensions_mut().insert(AuthenticatedUser {
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// Pull the token out of an `Authorization: Bearer <token>` value
fn bearer_token(header: Option<&str>) -> BackendResult<&str> {
    let header = header.ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        BackendError::unauthorized("Missing Authorization header")
    })?;

    header
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::unauthorized("Invalid Authorization header")
        })
}

/// Axum extractor for authenticated user
///
/// Only usable on routes behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("Not logged in")
            })?;

        Ok(AuthUser(user))
    }
}
