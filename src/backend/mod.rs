//! Backend Module
//!
//! This module contains all server-side code for Messagely: the Axum HTTP
//! server, the SQLite-backed stores for users and messages, and session
//! token handling.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - `UserStore`, JWT sessions, login and register handlers
//! - **`users`** - Profile and message-history handlers
//! - **`messaging`** - `MessageStore` and single-message handlers
//! - **`middleware`** - Bearer token verification
//! - **`error`** - `BackendError` and its HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Credentials and sessions
//! ├── users/          - User handlers
//! ├── messaging/      - Message storage and handlers
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds a `UserStore`, a `MessageStore` (both over one
//! `SqlitePool`) and the `SessionKeys`. None of it is mutable; concurrent
//! writes are serialized by the database.
//!
//! # Error Handling
//!
//! Stores and handlers return `Result<T, BackendError>`. `BackendError`
//! implements `IntoResponse`, so `?` in a handler produces the right status
//! and a JSON error body.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user data access
pub mod auth;

/// User profile and history handlers
pub mod users;

/// Middleware for request processing
pub mod middleware;

/// Message storage and handlers
pub mod messaging;

/// Re-export commonly used types
pub use server::{create_app, create_app_with_pool, AppConfig, AppState};
pub use error::BackendError;
pub use auth::UserStore;
pub use messaging::MessageStore;
