/**
 * Router Configuration
 *
 * Combines the public auth routes with the token-protected API routes into
 * a single Axum router.
 *
 * # Route Groups
 *
 * 1. Public routes: `/health`, `/login`, `/register`
 * 2. API routes (behind `auth_middleware`): `/users/...`, `/messages/...`
 * 3. Fallback handler (404)
 *
 * Every request is logged by `tower_http`'s `TraceLayer`.
 */

use axum::{middleware::from_fn_with_state, response::Json, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::auth::{login, register};
use crate::backend::error::BackendError;
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

pub fn create_router(app_state: AppState) -> Router<()> {
    let public = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/login", axum::routing::post(login))
        .route("/register", axum::routing::post(register));

    let protected = configure_api_routes(Router::new())
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    public
        .merge(protected)
        .fallback(|| async { BackendError::not_found("Route not found") })
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
