/**
 * API Route Handlers
 *
 * Routes that require a logged-in user. `create_router` wraps everything
 * added here in `auth_middleware`.
 *
 * # Routes
 *
 * ## Users
 * - `GET /users` - List all users
 * - `GET /users/{username}` - Profile of the logged-in user
 * - `GET /users/{username}/to` - Messages received by the logged-in user
 * - `GET /users/{username}/from` - Messages sent by the logged-in user
 *
 * ## Messages
 * - `GET /messages/{id}` - A message the user sent or received
 * - `POST /messages` - Send a message
 * - `POST /messages/{id}/read` - Mark a received message read
 */

use axum::Router;

use crate::backend::messaging::handlers::{get_message, mark_message_read, send_message};
use crate::backend::server::state::AppState;
use crate::backend::users::handlers::{get_messages_from, get_messages_to, get_user, list_users};

pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // User endpoints
        .route(
            "/users",
            axum::routing::get(list_users),
        )
        .route(
            "/users/{username}",
            axum::routing::get(get_user),
        )
        .route(
            "/users/{username}/to",
            axum::routing::get(get_messages_to),
        )
        .route(
            "/users/{username}/from",
            axum::routing::get(get_messages_from),
        )
        // Message endpoints
        .route(
            "/messages",
            axum::routing::post(send_message),
        )
        .route(
            "/messages/{id}",
            axum::routing::get(get_message),
        )
        .route(
            "/messages/{id}/read",
            axum::routing::post(mark_message_read),
        )
}
