//! Messaging Module
//!
//! This module handles message storage, message histories and the HTTP
//! handlers for single messages.

pub mod handlers;
pub mod db;

pub use db::MessageStore;
pub use handlers::*;
