//! Error types for the harness

use thiserror::Error;

use swagcheck_webdriver::WebDriverError;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Storefront unreachable at {url}: {reason}")]
    Preflight { url: String, reason: String },

    #[error("No suite matches \"{0}\"")]
    UnknownSuite(String),

    #[error("WebDriver error: {0}")]
    WebDriver(#[from] WebDriverError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
