//! Domain entity definitions.

mod place;

pub use place::{Place, PlaceId};
