//! Filter engine: substring matching and category flattening
//!
//! Given a fetched [`Dataset`](crate::dataset::Dataset) and a query string,
//! produces display-ready [`ResultItem`]s grouped per category, and flattens
//! them in the fixed order beaches, cities, temples that the result browser
//! depends on for its "first result" selection.

pub mod filter;
pub mod models;

pub use filter::filter;
pub use models::{BeachItem, CityItem, ResultItem, SearchResults, TempleItem};
