//! Display-ready result models
//!
//! These are pure data structures with minimal logic. Each [`ResultItem`]
//! variant carries its own well-typed record; the renderer pattern-matches
//! on the variant instead of probing optional fields. Items are produced
//! fresh per search and discarded on the next search or reset.

use crate::dataset::{BeachRec, CityRec, CountryRec, TempleRec};

/// A single flattened, display-ready record derived from one dataset entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultItem {
    /// A beach match
    Beach(BeachItem),
    /// A city match, carrying its parent country's name for display
    City(CityItem),
    /// A temple match
    Temple(TempleItem),
}

/// Projected beach card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeachItem {
    pub name: String,
    pub image_url: String,
    pub description: String,
}

/// Projected city card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityItem {
    /// Name of the country the city belongs to
    pub country_name: String,
    pub city_name: String,
    pub image_url: String,
    pub description: String,
}

/// Projected temple card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempleItem {
    pub name: String,
    pub image_url: String,
    pub description: String,
}

impl ResultItem {
    /// Title shown on the result card (the item's own name, or the city name)
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Beach(beach) => &beach.name,
            Self::City(city) => &city.city_name,
            Self::Temple(temple) => &temple.name,
        }
    }

    /// Image URL for the card
    #[must_use]
    pub fn image_url(&self) -> &str {
        match self {
            Self::Beach(beach) => &beach.image_url,
            Self::City(city) => &city.image_url,
            Self::Temple(temple) => &temple.image_url,
        }
    }

    /// Card description text
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Beach(beach) => &beach.description,
            Self::City(city) => &city.description,
            Self::Temple(temple) => &temple.description,
        }
    }

    /// Parent country name; only city items have one
    #[must_use]
    pub fn country_name(&self) -> Option<&str> {
        match self {
            Self::City(city) => Some(&city.country_name),
            Self::Beach(_) | Self::Temple(_) => None,
        }
    }
}

/// Projection of a beach record onto its display card
impl From<&BeachRec> for ResultItem {
    fn from(beach: &BeachRec) -> Self {
        Self::Beach(BeachItem {
            name: beach.name.clone(),
            image_url: beach.image_url.clone(),
            description: beach.description.clone(),
        })
    }
}

/// Projection of a city record plus its parent country onto a display card
impl From<(&CountryRec, &CityRec)> for ResultItem {
    fn from((country, city): (&CountryRec, &CityRec)) -> Self {
        Self::City(CityItem {
            country_name: country.name.clone(),
            city_name: city.name.clone(),
            image_url: city.image_url.clone(),
            description: city.description.clone(),
        })
    }
}

/// Projection of a temple record onto its display card
impl From<&TempleRec> for ResultItem {
    fn from(temple: &TempleRec) -> Self {
        Self::Temple(TempleItem {
            name: temple.name.clone(),
            image_url: temple.image_url.clone(),
            description: temple.description.clone(),
        })
    }
}

/// Per-category output of one filter run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub beaches: Vec<ResultItem>,
    pub cities: Vec<ResultItem>,
    pub temples: Vec<ResultItem>,
}

impl SearchResults {
    /// Total number of matches across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.beaches.len() + self.cities.len() + self.temples.len()
    }

    /// Whether the search matched nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into one ordered list: beaches, then cities, then temples
    ///
    /// The browser relies on this order for its "first result" selection.
    #[must_use]
    pub fn flatten(self) -> Vec<ResultItem> {
        let mut items = self.beaches;
        items.extend(self.cities);
        items.extend(self.temples);
        items
    }
}
