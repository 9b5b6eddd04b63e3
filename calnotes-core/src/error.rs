//! Error types for calnotes.

use thiserror::Error;

/// A request to the notes API failed.
///
/// Screens treat every variant the same way; the variants only exist so
/// logs can say what went wrong.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Invalid notes API URL: {0}")]
    InvalidUrl(String),

    #[error("Could not reach notes API: {0}")]
    Transport(String),

    #[error("Notes API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response from notes API: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RequestError::Decode(err.to_string())
        } else {
            RequestError::Transport(err.to_string())
        }
    }
}

/// Errors that can occur in calnotes operations.
#[derive(Error, Debug)]
pub enum CalNotesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD, today, tomorrow or yesterday")]
    InvalidDate(String),

    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Result type alias for calnotes operations.
pub type CalNotesResult<T> = Result<T, CalNotesError>;
