//! The poll loop.
//!
//! Drives fetch -> validate -> format -> notify cycles on a fixed interval.
//! Every cycle error is contained here: it is logged, reported to the chat
//! best-effort, and the same window is retried after the next sleep.

use std::time::Duration;

use crate::api::{extract_homeworks, StatusSource};
use crate::error::PollResult;
use crate::notification::MessageDispatcher;
use crate::services::render_status_change;

/// Background worker that polls the status API and forwards updates
pub struct PollWorker<S, D> {
    source: S,
    dispatcher: D,
    interval: Duration,
    checkpoint: i64,
}

impl<S: StatusSource, D: MessageDispatcher> PollWorker<S, D> {
    /// Creates a worker starting from the given checkpoint timestamp
    pub fn new(source: S, dispatcher: D, interval: Duration, checkpoint: i64) -> Self {
        Self {
            source,
            dispatcher,
            interval,
            checkpoint,
        }
    }

    /// Timestamp of the last successfully processed update window
    pub fn checkpoint(&self) -> i64 {
        self.checkpoint
    }

    /// Runs poll cycles forever, sleeping `interval` between them
    pub async fn run(&mut self) {
        loop {
            self.tick().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Executes one poll cycle, containing any cycle error
    pub async fn tick(&mut self) {
        match self.poll_once().await {
            Ok(0) => log::debug!("No new status changes"),
            Ok(count) => log::info!("Delivered {} status update(s)", count),
            Err(e) => {
                log::error!("Poll cycle failed: {}", e);
                self.report_failure(&e.to_string()).await;
            }
        }
    }

    /// Fetch, validate, format and deliver one batch of updates.
    ///
    /// Formatting is completed for the whole batch before anything is sent,
    /// and the checkpoint advances only when the whole cycle succeeds, so a
    /// failed cycle retries the same window.
    async fn poll_once(&mut self) -> PollResult<usize> {
        let body = self.source.fetch_updates(self.checkpoint).await?;
        let (homeworks, next_checkpoint) = extract_homeworks(&body, self.checkpoint)?;

        let messages = homeworks
            .iter()
            .map(render_status_change)
            .collect::<PollResult<Vec<_>>>()?;

        for message in &messages {
            let result = self.dispatcher.send(message).await;
            if !result.success {
                log::error!(
                    "Failed to deliver notification: {}",
                    result.error_message.as_deref().unwrap_or("unknown error")
                );
            }
        }

        self.checkpoint = next_checkpoint;
        Ok(messages.len())
    }

    /// Best-effort operator alert about a failed cycle
    async fn report_failure(&self, error: &str) {
        let alert = format!("Сбой в работе программы: {}", error);

        let result = self.dispatcher.send(&alert).await;
        if !result.success {
            log::error!(
                "Failed to deliver failure alert: {}",
                result.error_message.as_deref().unwrap_or("unknown error")
            );
        }
    }
}
