//! Telegram notification dispatcher.
//!
//! Sends messages to the operator chat through the Bot API `sendMessage`
//! method.

use async_trait::async_trait;
use serde_json::json;

use super::{MessageDispatcher, NotificationResult};
use crate::config::{PollConfig, TelegramConfig};

/// Telegram chat dispatcher
pub struct TelegramNotifier {
    client: reqwest::Client,
    url: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Creates a new Telegram notifier
    pub fn new(config: &TelegramConfig, poll: &PollConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(poll.http_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            url: format!(
                "{}/bot{}/sendMessage",
                config.api_base.trim_end_matches('/'),
                config.token
            ),
            chat_id: config.chat_id.clone(),
        }
    }

    /// Builds the `sendMessage` request payload
    fn format_payload(chat_id: &str, text: &str) -> serde_json::Value {
        json!({
            "chat_id": chat_id,
            "text": text,
        })
    }

    /// Extracts the `description` field from a Telegram error body
    fn error_description(body: &str) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("description")?
            .as_str()
            .map(str::to_string)
    }
}

#[async_trait]
impl MessageDispatcher for TelegramNotifier {
    async fn send(&self, text: &str) -> NotificationResult {
        let payload = Self::format_payload(&self.chat_id, text);

        match self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => {
                let status = response.status().as_u16();
                if response.status().is_success() {
                    NotificationResult::success(Some(status))
                } else {
                    let error_body = response.text().await.unwrap_or_default();
                    let error_msg = match Self::error_description(&error_body) {
                        Some(description) => format!("Telegram API error: {}", description),
                        None => format!("Telegram API error: HTTP {}", status),
                    };
                    NotificationResult::failure(error_msg, Some(status))
                }
            }
            Err(e) => {
                let error_msg = if e.is_timeout() {
                    "Request to Telegram timed out".to_string()
                } else if e.is_connect() {
                    "Connection to Telegram failed".to_string()
                } else {
                    format!("Telegram request failed: {}", e)
                };
                NotificationResult::failure(error_msg, None)
            }
        }
    }
}
