//! Dataset retrieval and wire types
//!
//! The fetcher performs one GET round trip against the recommendation
//! endpoint, runs a shallow structural check on the raw JSON, and returns a
//! typed [`Dataset`]. The `DataSource` trait is the seam that lets tests and
//! custom frontends swap the network out for an in-memory source.

pub mod error;
pub mod fetcher;
pub mod mock;
pub mod types;

pub use error::FetchError;
pub use fetcher::{DEFAULT_ENDPOINT, DataSource, HttpSource, parse_dataset};
pub use mock::{FailingSource, StaticSource};
pub use types::{BeachRec, CityRec, CountryRec, Dataset, TempleRec};
