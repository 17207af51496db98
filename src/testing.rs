//! Shared test fixtures

use crate::dataset::{BeachRec, CityRec, CountryRec, Dataset, TempleRec};

/// A small dataset covering every category and the interesting edge cases:
/// a country whose cities match while the country name does not ("kyo" in
/// Japan), and a country name that matches while its cities do not
/// ("japan").
#[must_use]
pub fn sample_dataset() -> Dataset {
    Dataset {
        beaches: vec![
            BeachRec {
                name: "Malibu Beach".into(),
                image_url: "https://example.com/malibu.jpg".into(),
                description: "Iconic Californian coastline.".into(),
            },
            BeachRec {
                name: "Bondi Beach".into(),
                image_url: "https://example.com/bondi.jpg".into(),
                description: "Sydney's famous surf beach.".into(),
            },
        ],
        countries: vec![
            CountryRec {
                name: "Australia".into(),
                cities: vec![
                    CityRec {
                        name: "Sydney".into(),
                        image_url: "https://example.com/sydney.jpg".into(),
                        description: "Harbour city.".into(),
                    },
                    CityRec {
                        name: "Melbourne".into(),
                        image_url: "https://example.com/melbourne.jpg".into(),
                        description: "Cultural capital.".into(),
                    },
                ],
            },
            CountryRec {
                name: "Japan".into(),
                cities: vec![
                    CityRec {
                        name: "Tokyo".into(),
                        image_url: "https://example.com/tokyo.jpg".into(),
                        description: "Sprawling metropolis.".into(),
                    },
                    CityRec {
                        name: "Kyoto".into(),
                        image_url: "https://example.com/kyoto.jpg".into(),
                        description: "Old imperial capital.".into(),
                    },
                ],
            },
        ],
        temples: vec![
            TempleRec {
                name: "Angkor Wat".into(),
                image_url: "https://example.com/angkor.jpg".into(),
                description: "Khmer temple complex.".into(),
            },
            TempleRec {
                name: "Golden Pavilion Temple".into(),
                image_url: "https://example.com/kinkakuji.jpg".into(),
                description: "Zen temple in Kyoto.".into(),
            },
        ],
    }
}

/// The sample dataset as a raw JSON body, for fetcher parse tests
#[must_use]
pub fn sample_json() -> String {
    serde_json::to_string(&sample_dataset()).expect("sample dataset serializes")
}
