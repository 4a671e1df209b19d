//! Infrastructure layer with configuration and catalog data sources.

/// Catalog data sources.
pub mod catalog;
/// Application configuration.
pub mod config;

pub use catalog::{BuiltinCatalog, TomlCatalogSource};
pub use config::{AppConfig, CliArgs, Locale, LogLevel, StorageManager};
