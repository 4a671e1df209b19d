//! Presentation layer with screens, widgets and input handling.

/// Key bindings.
pub mod commands;
/// Event handling.
pub mod events;
/// Localized labels.
pub mod i18n;
/// Colors and styles.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
