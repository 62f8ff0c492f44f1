use thiserror::Error;

/// Failure of a single upstream request.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
