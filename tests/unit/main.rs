//! Unit tests module
//!
//! Contains tests for individual components in isolation.

mod notification_test;
mod validate_test;
