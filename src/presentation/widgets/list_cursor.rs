//! Wrap-around cursor movement over `ListState`.

use ratatui::widgets::ListState;

/// Moves the selection one row down, wrapping to the top.
pub fn select_next(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let next = state.selected().map_or(0, |i| (i + 1) % len);
    state.select(Some(next));
}

/// Moves the selection one row up, wrapping to the bottom.
pub fn select_previous(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let previous = match state.selected() {
        Some(0) | None => len - 1,
        Some(i) => (i - 1).min(len - 1),
    };
    state.select(Some(previous));
}

pub fn select_first(state: &mut ListState, len: usize) {
    state.select((len > 0).then_some(0));
}

pub fn select_last(state: &mut ListState, len: usize) {
    state.select(len.checked_sub(1));
}

/// Keeps the selection inside `0..len`, selecting the first row when nothing is selected.
pub fn clamp(state: &mut ListState, len: usize) {
    match (state.selected(), len) {
        (_, 0) => state.select(None),
        (None, _) => state.select(Some(0)),
        (Some(i), len) if i >= len => state.select(Some(len - 1)),
        _ => {}
    }
}
