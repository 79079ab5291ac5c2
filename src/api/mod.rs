//! Status API access.
//!
//! The poll loop talks to the API through the [`StatusSource`] trait so the
//! HTTP client can be replaced with an in-memory fake in tests.

pub mod client;
pub mod validate;

use async_trait::async_trait;

use crate::error::PollResult;

pub use client::PracticumClient;
pub use validate::extract_homeworks;

/// A source of homework status updates
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch raw updates for submissions changed at or after `from_date`
    async fn fetch_updates(&self, from_date: i64) -> PollResult<serde_json::Value>;
}
