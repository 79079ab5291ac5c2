//! Notification delivery to the operator chat.
//!
//! Delivery lives behind the [`MessageDispatcher`] trait, and outcomes are
//! reported as [`NotificationResult`] values rather than errors, so a failed
//! send can never crash the poll loop.

pub mod telegram;

use async_trait::async_trait;

pub use telegram::TelegramNotifier;

/// Result of a notification delivery attempt
#[derive(Debug)]
pub struct NotificationResult {
    /// Whether the notification was delivered successfully
    pub success: bool,
    /// HTTP status code (if applicable)
    pub http_status: Option<u16>,
    /// Error message (if failed)
    pub error_message: Option<String>,
}

impl NotificationResult {
    /// Creates a successful result
    pub fn success(http_status: Option<u16>) -> Self {
        Self {
            success: true,
            http_status,
            error_message: None,
        }
    }

    /// Creates a failed result
    pub fn failure(error_message: String, http_status: Option<u16>) -> Self {
        Self {
            success: false,
            http_status,
            error_message: Some(error_message),
        }
    }
}

/// Trait for chat message dispatchers
#[async_trait]
pub trait MessageDispatcher: Send + Sync {
    /// Send a text message to the configured chat
    async fn send(&self, text: &str) -> NotificationResult;
}
