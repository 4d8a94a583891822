use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by dataset construction and the query operations.
///
/// Construction either fully succeeds or fails with one of these; nothing
/// is retried or partially recovered.
#[derive(Debug, Error)]
pub enum Error {
    /// A required parameter is missing or invalid for the chosen source mode.
    #[error("configuration: {0}")]
    Configuration(String),

    /// The remote API answered with a non-success status. No retry.
    #[error("remote fetch failed: HTTP {status}")]
    RemoteFetch { status: StatusCode },

    /// A county selector was empty or otherwise unusable.
    #[error("invalid county selector: {0}")]
    Selector(String),

    /// The response or file did not have the shape we expect.
    #[error("malformed data: {0}")]
    Malformed(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
