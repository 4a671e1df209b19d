//! Screen navigation.

mod screen;
mod screen_flow;

pub use screen::{NavEvent, Screen, ScreenKind};
pub use screen_flow::{ScreenFlow, Transition};
