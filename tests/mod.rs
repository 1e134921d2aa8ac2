//! Test suite for Messagely
//!
//! This module organizes all integration tests
