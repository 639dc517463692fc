use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the Sonarr client.
///
/// Configuration errors are detected locally before any request is sent.
/// Transport and decode errors come straight from `reqwest` and `serde_json`.
#[derive(Debug, Error)]
pub enum SonarrError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("api key is invalid format: expected 32 lowercase alphanumeric characters")]
    InvalidApiKey,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

pub type Result<T> = std::result::Result<T, SonarrError>;
