//! Stack-based navigator over the guide's screens.

use std::sync::Arc;

use tracing::debug;

use super::screen::{NavEvent, Screen};
use crate::application::services::ViewStateController;

/// Outcome of handling a navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A new screen was pushed and is now current.
    Pushed(Screen),
    /// The top screen was popped; carries the screen now current.
    Popped(Screen),
    /// The event does not apply to the current screen.
    Ignored,
}

/// Navigation history plus the controller calls each forward move requires.
pub struct ScreenFlow {
    stack: Vec<Screen>,
    controller: Arc<ViewStateController>,
}

impl ScreenFlow {
    /// Creates a flow positioned on the category list.
    #[must_use]
    pub fn new(controller: Arc<ViewStateController>) -> Self {
        Self {
            stack: vec![Screen::CategoryList],
            controller,
        }
    }

    /// Screen on top of the stack.
    #[must_use]
    pub fn current(&self) -> &Screen {
        // The root is never popped, so the stack is never empty.
        self.stack.last().unwrap_or(&Screen::CategoryList)
    }

    /// Whether a back target exists.
    #[must_use]
    pub fn can_navigate_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Number of screens on the stack, the root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Controller this flow drives.
    #[must_use]
    pub fn controller(&self) -> &Arc<ViewStateController> {
        &self.controller
    }

    /// Applies a navigation event.
    pub fn handle(&mut self, event: NavEvent) -> Transition {
        let current = self.current().clone();
        let transition = match (&current, event) {
            (Screen::CategoryList, NavEvent::OpenAbout) => self.push(Screen::About),
            (Screen::CategoryList, NavEvent::EnterCategory(category)) => {
                self.controller.select_category(&category);
                self.push(Screen::PlaceList { category })
            }
            (Screen::PlaceList { .. }, NavEvent::SelectPlace(place_id)) => {
                self.controller.select_place(place_id);
                self.push(Screen::PlaceDetail { place_id })
            }
            (_, NavEvent::Back) if self.can_navigate_back() => {
                self.stack.pop();
                Transition::Popped(self.current().clone())
            }
            (screen, event) => {
                debug!(screen = %screen, ?event, "Navigation event ignored");
                Transition::Ignored
            }
        };

        if transition != Transition::Ignored {
            debug!(screen = %self.current(), depth = self.depth(), "Navigated");
        }
        transition
    }

    fn push(&mut self, screen: Screen) -> Transition {
        self.stack.push(screen.clone());
        Transition::Pushed(screen)
    }
}
