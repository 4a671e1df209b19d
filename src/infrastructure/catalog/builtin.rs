//! Places shipped with the binary.

use crate::domain::entities::Place;
use crate::domain::errors::CatalogError;
use crate::domain::ports::CatalogSource;

/// (id, name, category, address, description)
const PLACES: &[(u32, &str, &str, &str, &str)] = &[
    (
        1,
        "Coffee Mania",
        "Cafes",
        "Bolshaya Nikitskaya St, 13",
        "A round-the-clock cafe next to the Conservatory, known for its breakfasts and the terrace that opens every May.",
    ),
    (
        2,
        "Surf Coffee",
        "Cafes",
        "Pokrovka St, 2",
        "Small espresso bar with a surfboard on the wall and a queue of students on weekday mornings.",
    ),
    (
        3,
        "Cafe Pushkin",
        "Cafes",
        "Tverskoy Blvd, 26A",
        "Restaurant in a restored 19th-century mansion with a library hall and a classic Russian menu.",
    ),
    (
        4,
        "State Tretyakov Gallery",
        "Museums",
        "Lavrushinsky Ln, 10",
        "The largest collection of Russian fine art, from medieval icons to early 20th-century painting.",
    ),
    (
        5,
        "Pushkin State Museum of Fine Arts",
        "Museums",
        "Volkhonka St, 12",
        "European art and antiquities, including a large hall of plaster casts and a French Impressionist wing.",
    ),
    (
        6,
        "Polytechnic Museum",
        "Museums",
        "Novaya Square, 3/4",
        "Science and technology museum with hands-on exhibits on machines, space flight and computing.",
    ),
    (
        7,
        "Gorky Park",
        "Parks",
        "Krymsky Val St, 9",
        "Central park on the Moskva river embankment with open lawns, rental bikes and an ice rink in winter.",
    ),
    (
        8,
        "Zaryadye Park",
        "Parks",
        "Varvarka St, 6",
        "Landscape park next to the Kremlin with four climate zones and a floating bridge over the river.",
    ),
    (
        9,
        "Sokolniki",
        "Parks",
        "Sokolnichesky Val St, 1",
        "Former royal hunting grounds, now a large forest park with radial alleys and summer stages.",
    ),
    (
        10,
        "GUM",
        "Shopping",
        "Red Square, 3",
        "Historic trading arcade with glass roofs, a fountain in the centre and a Soviet-style grocery.",
    ),
    (
        11,
        "Danilovsky Market",
        "Shopping",
        "Mytnaya St, 74",
        "Covered food market under a concrete dome with produce stalls and food counters from many cuisines.",
    ),
];

/// Catalog compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    /// Creates the built-in catalog source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CatalogSource for BuiltinCatalog {
    fn load_places(&self) -> Result<Vec<Place>, CatalogError> {
        Ok(PLACES
            .iter()
            .map(|&(id, name, category, address, description)| {
                Place::new(id, name, category, address, description)
            })
            .collect())
    }

    fn describe(&self) -> String {
        "built-in".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::CatalogStore;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let store = CatalogStore::from_source(&BuiltinCatalog::new()).unwrap();

        assert_eq!(store.len(), PLACES.len());
        assert_eq!(
            store.list_categories(),
            vec!["Cafes", "Museums", "Parks", "Shopping"]
        );
    }

    #[test]
    fn test_builtin_places_have_text() {
        let places = BuiltinCatalog::new().load_places().unwrap();

        assert!(places.iter().all(|p| !p.name().is_empty()
            && !p.address().is_empty()
            && !p.description().is_empty()));
    }
}
