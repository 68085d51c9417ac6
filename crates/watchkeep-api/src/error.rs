use thiserror::Error;

/// The single failure kind surfaced by every API call.
///
/// Callers only get a human-readable message; there is no structured code
/// and no distinction between a transport failure and a non-success status.
/// Display and retry policy belong to the caller.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("Request failed: {}", err))
    }
}
