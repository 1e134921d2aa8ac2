//! Users Module
//!
//! HTTP handlers for user profiles and per-user message histories. Data
//! access lives in `auth::users` and `messaging::db`.

pub mod handlers;

pub use handlers::{get_messages_from, get_messages_to, get_user, list_users};
