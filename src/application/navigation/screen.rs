//! Screen identifiers and navigation events.

use crate::domain::entities::PlaceId;

/// A navigable screen together with its route parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// List of all categories. Root of the navigation stack.
    #[default]
    CategoryList,
    /// Places of one category.
    PlaceList {
        /// Category the list was opened for.
        category: String,
    },
    /// Details of one place.
    PlaceDetail {
        /// Place the detail view was opened for.
        place_id: PlaceId,
    },
    /// Static information about the application.
    About,
}

/// Screen identity without route parameters, used to pick titles and key hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    /// Category list.
    CategoryList,
    /// Place list.
    PlaceList,
    /// Place detail.
    PlaceDetail,
    /// About.
    About,
}

impl Screen {
    /// Returns the parameterless kind of this screen.
    #[must_use]
    pub const fn kind(&self) -> ScreenKind {
        match self {
            Self::CategoryList => ScreenKind::CategoryList,
            Self::PlaceList { .. } => ScreenKind::PlaceList,
            Self::PlaceDetail { .. } => ScreenKind::PlaceDetail,
            Self::About => ScreenKind::About,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CategoryList => write!(f, "Categories"),
            Self::PlaceList { category } => write!(f, "Places/{category}"),
            Self::PlaceDetail { place_id } => write!(f, "Details/{place_id}"),
            Self::About => write!(f, "About"),
        }
    }
}

/// User intent raised by the render layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Open the place list of a category.
    EnterCategory(String),
    /// Open the about screen.
    OpenAbout,
    /// Open the detail view of a place.
    SelectPlace(PlaceId),
    /// Return to the previous screen.
    Back,
}
