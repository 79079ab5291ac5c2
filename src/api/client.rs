//! HTTP client for the homework status API.

use async_trait::async_trait;
use chrono::Utc;

use super::StatusSource;
use crate::config::{PollConfig, PracticumConfig};
use crate::error::{PollError, PollResult};

/// Client for the Practicum homework status endpoint
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Creates a new status API client
    pub fn new(config: &PracticumConfig, poll: &PollConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(poll.http_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
        }
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch_updates(&self, from_date: i64) -> PollResult<serde_json::Value> {
        // A zero checkpoint means "start from now"
        let from_date = if from_date > 0 {
            from_date
        } else {
            Utc::now().timestamp()
        };

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PollError::Transport("request timed out".to_string())
                } else if e.is_connect() {
                    PollError::Transport("connection failed".to_string())
                } else {
                    PollError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::ApiStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PollError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(PollError::MalformedResponse)
    }
}
