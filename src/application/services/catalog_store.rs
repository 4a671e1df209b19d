//! Read-only lookups over the validated place catalog.

use std::collections::HashMap;
use std::collections::HashSet;

use tracing::{debug, info};

use crate::domain::entities::{Place, PlaceId};
use crate::domain::errors::CatalogError;
use crate::domain::ports::CatalogSource;

/// Validated, immutable catalog of places.
///
/// Categories are derived once, in the order they first appear in the catalog.
#[derive(Debug)]
pub struct CatalogStore {
    places: Vec<Place>,
    categories: Vec<String>,
    index_by_id: HashMap<PlaceId, usize>,
}

impl CatalogStore {
    /// Builds a store from a list of places.
    ///
    /// # Errors
    /// Returns `CatalogError` if the list is empty, contains a duplicate id,
    /// or contains a place with a blank category.
    pub fn new(places: Vec<Place>) -> Result<Self, CatalogError> {
        if places.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut index_by_id = HashMap::with_capacity(places.len());
        let mut seen_categories = HashSet::new();
        let mut categories = Vec::new();

        for (index, place) in places.iter().enumerate() {
            if place.category().trim().is_empty() {
                return Err(CatalogError::BlankCategory { id: place.id() });
            }
            if index_by_id.insert(place.id(), index).is_some() {
                return Err(CatalogError::DuplicatePlaceId { id: place.id() });
            }
            if seen_categories.insert(place.category()) {
                categories.push(place.category().to_string());
            }
        }

        debug!(
            places = places.len(),
            categories = categories.len(),
            "Catalog validated"
        );

        Ok(Self {
            places,
            categories,
            index_by_id,
        })
    }

    /// Loads and validates places from a catalog source.
    ///
    /// # Errors
    /// Returns `CatalogError` if the source fails or the data is malformed.
    pub fn from_source(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        let places = source.load_places()?;
        let store = Self::new(places)?;
        info!(source = %source.describe(), places = store.len(), "Catalog loaded");
        Ok(store)
    }

    /// Distinct category names in first-seen order.
    #[must_use]
    pub fn list_categories(&self) -> Vec<String> {
        self.categories.clone()
    }

    /// Every place in the given category, in catalog order.
    ///
    /// Unknown categories yield an empty list.
    #[must_use]
    pub fn list_places_by_category(&self, category: &str) -> Vec<Place> {
        self.places
            .iter()
            .filter(|place| place.category() == category)
            .cloned()
            .collect()
    }

    /// Looks up a place by id.
    #[must_use]
    pub fn get_place_by_id(&self, id: PlaceId) -> Option<Place> {
        self.index_by_id
            .get(&id)
            .and_then(|&index| self.places.get(index))
            .cloned()
    }

    /// Number of places.
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Returns whether the store holds no places.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
