//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! └── login.rs     - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register - create a user and return a token
//! - **`login`** - POST /login - check credentials and return a token
//!
//! Both update the user's `last_login_at`.

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{LoginRequest, RegisterRequest, TokenResponse};

// Re-export handlers
pub use register::register;
pub use login::login;
