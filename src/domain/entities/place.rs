//! Place entity.

use serde::{Deserialize, Serialize};

/// Unique identifier for a place in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(pub u32);

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlaceId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A point of interest listed in the guide.
///
/// Places are created once when the catalog loads and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    id: PlaceId,
    name: String,
    category: String,
    address: String,
    description: String,
}

impl Place {
    /// Creates a new place.
    #[must_use]
    pub fn new(
        id: impl Into<PlaceId>,
        name: impl Into<String>,
        category: impl Into<String>,
        address: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            address: address.into(),
            description: description.into(),
        }
    }

    /// Returns the place ID.
    #[must_use]
    pub const fn id(&self) -> PlaceId {
        self.id
    }

    /// Returns the place name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the category this place belongs to.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the street address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the long-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_creation() {
        let place = Place::new(7_u32, "Cafe Pushkin", "Cafe", "Tverskoy Blvd 26A", "Old manor");

        assert_eq!(place.id(), PlaceId(7));
        assert_eq!(place.name(), "Cafe Pushkin");
        assert_eq!(place.category(), "Cafe");
        assert_eq!(place.address(), "Tverskoy Blvd 26A");
        assert_eq!(place.description(), "Old manor");
    }

    #[test]
    fn test_place_id_display() {
        assert_eq!(format!("{}", PlaceId(42)), "42");
    }

    #[test]
    fn test_place_deserializes_from_toml() {
        let place: Place = toml::from_str(
            r#"
                id = 3
                name = "Tretyakov Gallery"
                category = "Museum"
                address = "Lavrushinsky Ln 10"
                description = "Russian art"
            "#,
        )
        .unwrap();

        assert_eq!(place.id(), PlaceId(3));
        assert_eq!(place.category(), "Museum");
    }
}
