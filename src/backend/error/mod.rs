//! Backend Error Module
//!
//! This module defines the error type shared by the stores and the HTTP
//! handlers.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse` from Axum, so handlers can return
//! it directly. Each variant maps to one status code and a JSON body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;

/// Result alias used by stores and handlers
pub type BackendResult<T> = Result<T, BackendError>;
