//! Application layer with catalog lookups, view state and navigation.

/// Screen navigation.
pub mod navigation;
/// Catalog and view state services.
pub mod services;

pub use navigation::{NavEvent, Screen, ScreenFlow, Transition};
pub use services::{CatalogStore, UiState, ViewStateController};
