//! Homework submission records returned by the status API.

use serde::Deserialize;

/// One reviewed work item as reported by the status API.
///
/// Both fields are optional at the parse layer: the API has been observed to
/// omit either one, and record-level validation happens at formatting time so
/// an incomplete record is rejected instead of silently notified.
#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    #[serde(default)]
    pub homework_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
