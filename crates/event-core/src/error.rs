//! Error types for event-core.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that abort an event load.
#[derive(Debug, Error)]
pub enum EventError {
    /// A required field was missing or empty.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A row failed validation during a batch load.
    #[error("Row {row} is invalid: {source}")]
    InvalidRow {
        /// 1-based data row number (the header is not counted).
        row: usize,
        #[source]
        source: ValidationError,
    },

    /// The date/time cell is not a calendar instant.
    #[error("Cannot parse date/time {value:?}: {reason}")]
    Parse { value: String, reason: String },

    /// Network, HTTP or document failure from a data source.
    #[error("Fetch failed: {0}")]
    Fetch(String),
}

impl EventError {
    /// Returns the validation error if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::InvalidRow { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Whether this error came from the date/time parser.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}
