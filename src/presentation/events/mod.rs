//! Event handling.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

/// Result of event handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event did not apply; nothing changed.
    Continue,
    /// Exit application.
    Exit,
    /// Event was consumed and the screen needs a redraw.
    Consumed,
}

/// Extracts key presses and repeats, dropping the releases some terminals report.
#[must_use]
pub fn key_press(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(*key),
        _ => None,
    }
}
