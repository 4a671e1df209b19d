//! Observable view state shared between navigation and rendering.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::application::services::CatalogStore;
use crate::domain::entities::{Place, PlaceId};

/// Immutable snapshot of what the screens should currently show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Category names, set once when the controller is built.
    pub categories: Vec<String>,
    /// Places belonging to `current_category`.
    pub current_category_places: Vec<Place>,
    /// Place picked for the detail screen, `None` until one is chosen or if the id was unknown.
    pub current_selected_place: Option<Place>,
    /// Last category passed to `select_category`.
    pub current_category: String,
    /// Number of snapshots published before this one.
    pub revision: u64,
}

/// Single writer of the UI state.
///
/// Each mutation publishes a new `Arc<UiState>`; snapshots already handed out never change.
pub struct ViewStateController {
    catalog: Arc<CatalogStore>,
    state_tx: watch::Sender<Arc<UiState>>,
}

impl ViewStateController {
    /// Creates the controller and publishes the initial snapshot with the category list.
    #[must_use]
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        let initial = UiState {
            categories: catalog.list_categories(),
            ..UiState::default()
        };
        debug!(categories = initial.categories.len(), "View state initialized");

        let (state_tx, _) = watch::channel(Arc::new(initial));
        Self { catalog, state_tx }
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<UiState> {
        self.state_tx.borrow().clone()
    }

    /// Receiver notified on every publish.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<UiState>> {
        self.state_tx.subscribe()
    }

    /// Switches the place list to `category`.
    ///
    /// Leaves the selected place as it was.
    pub fn select_category(&self, category: &str) {
        let places = self.catalog.list_places_by_category(category);
        debug!(category, places = places.len(), "Category selected");

        self.publish(|next| {
            next.current_category = category.to_string();
            next.current_category_places = places;
        });
    }

    /// Sets the detail place, or clears it if the catalog has no such id.
    pub fn select_place(&self, id: PlaceId) {
        let place = self.catalog.get_place_by_id(id);
        debug!(place_id = %id, found = place.is_some(), "Place selected");

        self.publish(|next| {
            next.current_selected_place = place;
        });
    }

    fn publish(&self, apply: impl FnOnce(&mut UiState)) {
        // send_modify holds the channel lock for the whole read-copy-replace step.
        self.state_tx.send_modify(|current| {
            let mut next = (**current).clone();
            apply(&mut next);
            next.revision = current.revision + 1;
            *current = Arc::new(next);
        });
    }
}
