//! City Guide - browse a city's places by category in the terminal.
//!
//! The crate is layered: a validated in-memory catalog, an observable view
//! state fed from it, a stack-based screen navigator, and a ratatui front end.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing catalog lookups, view state and navigation.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and catalog sources.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "cityguide";
