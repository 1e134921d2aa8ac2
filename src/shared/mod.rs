//! Shared Module
//!
//! This module contains the data types returned by the stores and serialized
//! by the HTTP handlers. None of them depend on axum, so they can be reused by
//! clients that talk to the API.

/// User projections
pub mod user;

/// Message views
pub mod message;

/// Client input errors
pub mod error;

/// Re-export commonly used types for convenience
pub use user::{Counterpart, RegisteredUser, UserDetail, UserSummary};
pub use message::{Message, MessageDetail, ReadReceipt, ReceivedMessage, SentMessage};
pub use error::SharedError;
