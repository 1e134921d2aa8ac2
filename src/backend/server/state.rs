/**
 * Application State Management
 *
 * `AppState` holds the two stores and the session keys. All three are cheap
 * to clone (the stores share one `SqlitePool`), so the state is cloned into
 * every handler.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part they
 * need:
 *
 * ```rust
 * use axum::extract::State;
 * use messagely::backend::auth::users::UserStore;
 *
 * async fn handler(State(users): State<UserStore>) {
 *     let _ = users;
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::users::UserStore;
use crate::backend::error::BackendResult;
use crate::backend::messaging::db::MessageStore;
use crate::backend::server::config::AppConfig;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserStore,
    pub messages: MessageStore,
    pub sessions: SessionKeys,
}

impl AppState {
    /// Build the state over an open pool
    pub fn new(pool: SqlitePool, config: &AppConfig) -> BackendResult<Self> {
        Ok(Self {
            users: UserStore::new(pool.clone(), config.bcrypt_cost)?,
            messages: MessageStore::new(pool),
            sessions: SessionKeys::from_config(config),
        })
    }
}

impl FromRef<AppState> for UserStore {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

impl FromRef<AppState> for MessageStore {
    fn from_ref(state: &AppState) -> Self {
        state.messages.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}
