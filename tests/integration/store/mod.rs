//! Store integration tests

mod messages_test;
mod users_test;
