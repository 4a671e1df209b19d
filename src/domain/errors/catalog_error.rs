//! Catalog error types.

use thiserror::Error;

use crate::domain::entities::PlaceId;

/// Errors raised while loading or validating the place catalog.
///
/// All of these are fatal at startup: the guide cannot run on a malformed catalog.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("catalog contains no places")]
    EmptyCatalog,

    #[error("duplicate place id {id} in catalog")]
    DuplicatePlaceId { id: PlaceId },

    #[error("place {id} has an empty category")]
    BlankCategory { id: PlaceId },

    #[error("failed to read catalog source: {message}")]
    Source { message: String },
}

impl CatalogError {
    /// Creates an error for a source that could not be read or parsed.
    #[must_use]
    pub fn unreadable(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CatalogError::DuplicatePlaceId { id: PlaceId(4) }.to_string(),
            "duplicate place id 4 in catalog"
        );
        assert_eq!(
            CatalogError::unreadable("missing file").to_string(),
            "failed to read catalog source: missing file"
        );
    }

    #[test]
    fn test_unreadable_wraps_message() {
        let err = CatalogError::unreadable("places.toml: not found");
        assert!(matches!(err, CatalogError::Source { ref message } if message == "places.toml: not found"));
    }
}
