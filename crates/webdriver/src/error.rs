//! Error types for the WebDriver client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebDriverError {
    #[error("Driver failed to start: {0}")]
    DriverStartup(String),

    #[error("Driver status check failed after {0} attempts")]
    DriverStatusCheck(usize),

    #[error("WebDriver error: {error}: {message}")]
    Api { error: String, message: String },

    #[error("Timed out after {waited_ms}ms waiting for: {condition}")]
    WaitTimeout { condition: String, waited_ms: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl WebDriverError {
    /// True for wire errors a poll loop should swallow and retry:
    /// the element is not there yet, or a kept reference went stale.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            WebDriverError::Api { error, .. }
                if error == "no such element" || error == "stale element reference"
        )
    }
}

pub type Result<T> = std::result::Result<T, WebDriverError>;
