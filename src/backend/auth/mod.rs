//! Authentication Module
//!
//! This module handles registration, credential checks and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - UserStore, the data access layer for `users`
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: user details → user created → token returned
//! 2. **Login**: username and password → credentials verified → token returned
//! 3. **Protected routes**: token in `Authorization: Bearer` → verified by
//!    `middleware::auth_middleware`
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt at the configured work factor
//! - Tokens are HS256 JWTs signed with the configured secret
//! - Invalid credentials return 401 without saying which part was wrong

/// User data access
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, RegisterRequest, TokenResponse};
pub use handlers::{login, register};
pub use sessions::{Claims, SessionKeys};
pub use users::{NewUser, UserStore};
