//! Response shape validation for the status API.
//!
//! The payload is only trusted after it passes a typed parse: any structural
//! mismatch fails the whole cycle instead of leaking a partial record into
//! the notification pipeline.

use serde_json::Value;

use crate::error::{PollError, PollResult};
use crate::models::Homework;

/// Extracts homework records and the next checkpoint from a response body.
///
/// A missing `current_date` keeps `prior` unchanged: an omitted echo field
/// must not fail an otherwise valid poll. A present but non-integer
/// `current_date` is a shape error.
pub fn extract_homeworks(body: &Value, prior: i64) -> PollResult<(Vec<Homework>, i64)> {
    let map = body
        .as_object()
        .ok_or_else(|| PollError::Shape("response is not an object".to_string()))?;

    let items = map
        .get("homeworks")
        .and_then(Value::as_array)
        .ok_or_else(|| PollError::Shape("homeworks is not a list".to_string()))?;

    let homeworks = items
        .iter()
        .map(|item| {
            serde_json::from_value::<Homework>(item.clone())
                .map_err(|_| PollError::Shape("homework record is not an object".to_string()))
        })
        .collect::<PollResult<Vec<_>>>()?;

    let next = match map.get("current_date") {
        None => prior,
        Some(value) => value
            .as_i64()
            .ok_or_else(|| PollError::Shape("current_date is not an integer".to_string()))?,
    };

    Ok((homeworks, next))
}
