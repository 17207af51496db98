//! Wire-format types for the recommendation dataset
//!
//! These are pure data structures mirroring the JSON document served by the
//! recommendation endpoint. Field names on the wire are camelCase
//! (`imageUrl`). The dataset is immutable once fetched; everything downstream
//! reads it through shared references.

use serde::{Deserialize, Serialize};

/// The full parsed travel recommendation document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub beaches: Vec<BeachRec>,
    pub countries: Vec<CountryRec>,
    pub temples: Vec<TempleRec>,
}

/// A beach destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeachRec {
    pub name: String,
    pub image_url: String,
    pub description: String,
}

/// A country grouping one or more city destinations
///
/// Countries are never displayable items themselves; they exist to carry
/// their cities and lend the city cards a country label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRec {
    pub name: String,
    pub cities: Vec<CityRec>,
}

/// A city destination nested under a country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRec {
    pub name: String,
    pub image_url: String,
    pub description: String,
}

/// A temple destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TempleRec {
    pub name: String,
    pub image_url: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beach_rec_wire_field_names() {
        let json = r#"{
            "name": "Malibu Beach",
            "imageUrl": "https://example.com/malibu.jpg",
            "description": "Iconic Californian coastline."
        }"#;

        let beach: BeachRec = serde_json::from_str(json).unwrap();
        assert_eq!(beach.name, "Malibu Beach");
        assert_eq!(beach.image_url, "https://example.com/malibu.jpg");
    }

    #[test]
    fn test_country_rec_nests_cities() {
        let json = r#"{
            "name": "Japan",
            "cities": [
                {"name": "Kyoto", "imageUrl": "https://example.com/kyoto.jpg", "description": "Old capital."}
            ]
        }"#;

        let country: CountryRec = serde_json::from_str(json).unwrap();
        assert_eq!(country.name, "Japan");
        assert_eq!(country.cities.len(), 1);
        assert_eq!(country.cities[0].name, "Kyoto");
    }

    #[test]
    fn test_dataset_roundtrip() {
        let dataset = Dataset {
            beaches: vec![BeachRec {
                name: "Bondi Beach".into(),
                image_url: "https://example.com/bondi.jpg".into(),
                description: "Sydney surf beach.".into(),
            }],
            countries: vec![],
            temples: vec![],
        };

        let json = serde_json::to_string(&dataset).unwrap();
        assert!(json.contains("\"imageUrl\""));

        let back: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dataset);
    }
}
