//! Mouse input handler.

use anyhow::Result;
use ratatui::layout::Rect;

use crate::models::Command;
use crate::tui::{main_layout, AppState, GridGeometry};

use super::action_handlers::selection;

/// Handle a left click at terminal cell (`column`, `row`).
///
/// `screen` is the full terminal area; the grid is located with the same
/// layout the renderer uses. Clicks outside a note cell are ignored.
pub fn handle_mouse_click(state: &mut AppState, screen: Rect, column: u16, row: u16) -> Result<bool> {
    if state.help.is_some() {
        return Ok(false);
    }

    let grid = main_layout(screen).grid;
    let geometry = GridGeometry::compute(grid, &state.fretboard, state.cursor);

    if let Some((string, fret)) = geometry.cell_at(column, row) {
        tracing::debug!(string, fret, "click");
        state.cursor.string = string;
        state.cursor.fret = fret;
        let outcome = state.fretboard.handle(Command::ToggleAt { string, fret });
        selection::report(state, outcome);
    }

    Ok(false)
}
