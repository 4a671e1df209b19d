//! Application services.

mod catalog_store;
mod view_state;

pub use catalog_store::CatalogStore;
pub use view_state::{UiState, ViewStateController};
