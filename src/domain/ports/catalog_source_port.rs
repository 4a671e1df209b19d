//! Catalog source port definition.

use crate::domain::entities::Place;
use crate::domain::errors::CatalogError;

/// Port for the collaborator that supplies the initial list of places.
///
/// Read once at startup, before the catalog store answers any query.
pub trait CatalogSource: Send + Sync {
    /// Loads every place record in catalog order.
    ///
    /// # Errors
    /// Returns `CatalogError::Source` if the underlying data cannot be read.
    fn load_places(&self) -> Result<Vec<Place>, CatalogError>;

    /// Human readable origin, used in logs.
    fn describe(&self) -> String;
}
