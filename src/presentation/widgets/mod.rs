mod footer_bar;
mod header_bar;
pub mod list_cursor;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
