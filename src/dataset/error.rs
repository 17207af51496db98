//! Fetcher error types

use thiserror::Error;

/// Errors that can occur while fetching or decoding the dataset
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success HTTP status
    #[error("Request failed with HTTP status {status}")]
    Transport { status: u16 },

    /// A required top-level category key is absent from the document
    #[error("Dataset is missing required key '{0}'")]
    MissingKey(&'static str),

    /// The response body is not valid JSON or does not match the wire types
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// The request itself failed (connection refused, timeout, bad URL)
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;
