//! UI screens.

mod about_screen;
mod app;
mod category_screen;
mod place_detail_screen;
mod place_list_screen;

pub use about_screen::AboutScreen;
pub use app::App;
pub use category_screen::CategoryScreen;
pub use place_detail_screen::PlaceDetailScreen;
pub use place_list_screen::PlaceListScreen;
