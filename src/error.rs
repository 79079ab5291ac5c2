/// Errors produced by a single poll cycle
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error("Request to the status API failed: {0}")]
    Transport(String),

    #[error("Status API returned HTTP {0}")]
    ApiStatus(u16),

    #[error("Status API returned invalid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    Shape(String),

    #[error("Homework record is missing field: {0}")]
    MissingField(&'static str),

    #[error("Unknown review status: {0}")]
    UnknownStatus(String),
}

/// Result type alias for poll cycle operations
pub type PollResult<T> = Result<T, PollError>;
