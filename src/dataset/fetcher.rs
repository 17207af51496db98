//! Data fetcher for the recommendation endpoint
//!
//! One GET round trip, no retries, no caching. A failed fetch is reported as
//! a typed [`FetchError`]; whether to surface or absorb it is the caller's
//! decision, not the fetcher's.

use super::error::{FetchError, Result};
use super::types::Dataset;

/// Default dataset location when no endpoint is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/travel_recommendation_api.json";

/// Top-level keys every dataset document must carry
pub const REQUIRED_KEYS: [&str; 3] = ["beaches", "countries", "temples"];

/// Trait for dataset sources
///
/// This trait abstracts away where the dataset comes from, allowing the
/// HTTP fetcher to be swapped out for an in-memory source in tests or
/// custom frontends.
pub trait DataSource {
    /// Retrieve the full dataset
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the source is unreachable, answers with a
    /// non-success status, or serves a document that fails the shape check.
    fn fetch(&self) -> Result<Dataset>;
}

/// HTTP dataset source
///
/// Holds a reusable blocking client and the endpoint URL. Every call to
/// [`DataSource::fetch`] performs a fresh round trip; the fetcher never
/// caches a response.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpSource {
    /// Create a source for the given endpoint URL
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint URL this source fetches from
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl DataSource for HttpSource {
    fn fetch(&self) -> Result<Dataset> {
        let response = self.client.get(&self.endpoint).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport {
                status: status.as_u16(),
            });
        }
        parse_dataset(&response.text()?)
    }
}

/// Parse a raw JSON body into a typed dataset
///
/// Runs the shallow structural check first: all three category keys must be
/// present on the raw value before the typed decode, so an absent category
/// reports as [`FetchError::MissingKey`] rather than a generic parse failure.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] for malformed JSON or records that do not
/// match the wire types, [`FetchError::MissingKey`] for an absent category.
pub fn parse_dataset(body: &str) -> Result<Dataset> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    for key in REQUIRED_KEYS {
        if value.get(key).is_none() {
            return Err(FetchError::MissingKey(key));
        }
    }
    Ok(serde_json::from_value(value)?)
}
