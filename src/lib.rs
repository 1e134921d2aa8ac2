//! Messagely - Main Library
//!
//! Messagely is a small messaging backend: users register and log in, send
//! each other messages, and read their sent and received history.
//!
//! # Module Structure
//!
//! - **`shared`** - Data types returned by the stores and the API
//!   - User projections (`UserSummary`, `UserDetail`, `RegisteredUser`)
//!   - Message views (`SentMessage`, `ReceivedMessage`, `MessageDetail`)
//!   - Client input errors
//!
//! - **`backend`** - Server-side code
//!   - `UserStore`: registration, authentication, login timestamps, lookup
//!   - `MessageStore`: message histories joined with counterpart profiles
//!   - Axum handlers, JWT sessions, bearer token middleware
//!
//! # Usage
//!
//! ```rust,no_run
//! use messagely::backend::server::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for invalid client input
//! - `backend::BackendError` for everything a store or handler can fail with

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
