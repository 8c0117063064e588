//! Error types for sheets-client.

use event_core::EventError;
use thiserror::Error;

/// Errors that can occur when fetching sheet values.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success status from the API.
    #[error("HTTP {status} from {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    /// The response held no document.
    #[error("No data found from URL: {0}")]
    EmptyDocument(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<SheetsError> for EventError {
    fn from(err: SheetsError) -> Self {
        EventError::Fetch(err.to_string())
    }
}
