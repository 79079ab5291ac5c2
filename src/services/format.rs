//! Renders homework records into user-facing notification messages.

use crate::error::{PollError, PollResult};
use crate::models::{Homework, ReviewStatus};

/// Renders the status-change notification for one homework record.
///
/// Rejects records with a missing name or status, and statuses outside the
/// known catalog: an invalid record must never reach the chat.
pub fn render_status_change(homework: &Homework) -> PollResult<String> {
    let name = homework
        .homework_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(PollError::MissingField("homework_name"))?;

    let status = homework
        .status
        .as_deref()
        .filter(|status| !status.is_empty())
        .ok_or(PollError::MissingField("status"))?;

    let verdict = ReviewStatus::parse(status)
        .ok_or_else(|| PollError::UnknownStatus(status.to_string()))?
        .verdict();

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name, verdict
    ))
}
