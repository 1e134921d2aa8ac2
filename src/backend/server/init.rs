/**
 * Server Initialization
 *
 * This module opens the database, builds the application state and
 * assembles the router.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and run migrations
 * 2. Create the stores and session keys from `AppConfig`
 * 3. Create and configure the router
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::error::BackendResult;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, AppConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database cannot be opened or migrated, or if bcrypt rejects
/// the configured cost.
pub async fn create_app(config: &AppConfig) -> BackendResult<Router<()>> {
    tracing::info!("Initializing Messagely backend server");

    let pool = connect_database(config).await?;
    create_app_with_pool(pool, config)
}

/// Build the application over an already-open pool
pub fn create_app_with_pool(pool: SqlitePool, config: &AppConfig) -> BackendResult<Router<()>> {
    let app_state = AppState::new(pool, config)?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
