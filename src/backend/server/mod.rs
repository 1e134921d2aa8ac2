//! Server Module
//!
//! This module initializes and configures the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading and database setup
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::load` reads defaults, an optional
//!    TOML file and the environment
//! 2. **Database**: opens the SQLite pool and applies `migrations/`
//! 3. **State Creation**: builds `UserStore`, `MessageStore` and `SessionKeys`
//! 4. **Router Creation**: configures all routes and middleware

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use init::{create_app, create_app_with_pool};
