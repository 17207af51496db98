//! Substring filtering across dataset categories
//!
//! The matching predicate is case-insensitive substring containment; the
//! empty query matches everything. Beaches and temples match on their own
//! name. A country is scanned when its own name matches or any of its cities
//! does, but city inclusion is always keyed on the city's own name, never the
//! country's. Source array order is preserved within each category.

use crate::dataset::Dataset;
use crate::search::models::{ResultItem, SearchResults};

/// Filter a dataset by a user query
///
/// Produces per-category display items; call
/// [`SearchResults::flatten`] for the single ordered list the browser uses.
#[must_use]
pub fn filter(dataset: &Dataset, query: &str) -> SearchResults {
    let needle = query.to_lowercase();

    let beaches = dataset
        .beaches
        .iter()
        .filter(|beach| matches(&beach.name, &needle))
        .map(ResultItem::from)
        .collect();

    // A country qualifies for the city scan when its own name matches or any
    // of its cities' names do; the emitted set is still keyed per city.
    let cities = dataset
        .countries
        .iter()
        .filter(|country| {
            matches(&country.name, &needle)
                || country.cities.iter().any(|city| matches(&city.name, &needle))
        })
        .flat_map(|country| {
            country
                .cities
                .iter()
                .filter(|city| matches(&city.name, &needle))
                .map(move |city| ResultItem::from((country, city)))
        })
        .collect();

    let temples = dataset
        .temples
        .iter()
        .filter(|temple| matches(&temple.name, &needle))
        .map(ResultItem::from)
        .collect();

    SearchResults {
        beaches,
        cities,
        temples,
    }
}

/// Case-insensitive containment; `needle` must already be lowercased
fn matches(candidate: &str, needle: &str) -> bool {
    candidate.to_lowercase().contains(needle)
}
