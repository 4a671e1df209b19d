//! Catalog loaded from a TOML file.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::Place;
use crate::domain::errors::CatalogError;
use crate::domain::ports::CatalogSource;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    places: Vec<Place>,
}

/// Reads `[[places]]` tables from a TOML file.
///
/// ```toml
/// [[places]]
/// id = 1
/// name = "Gorky Park"
/// category = "Parks"
/// address = "Krymsky Val St, 9"
/// description = "Central park on the river embankment."
/// ```
#[derive(Debug, Clone)]
pub struct TomlCatalogSource {
    path: PathBuf,
}

impl TomlCatalogSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parses catalog text.
    ///
    /// # Errors
    /// Returns `CatalogError::Source` if the text is not a valid catalog document.
    pub fn parse(content: &str) -> Result<Vec<Place>, CatalogError> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| CatalogError::unreadable(format!("invalid catalog: {e}")))?;
        Ok(file.places)
    }
}

impl CatalogSource for TomlCatalogSource {
    fn load_places(&self) -> Result<Vec<Place>, CatalogError> {
        debug!(path = %self.path.display(), "Reading catalog file");
        let content = fs::read_to_string(&self.path).map_err(|e| {
            CatalogError::unreadable(format!("{}: {e}", self.path.display()))
        })?;
        Self::parse(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
