// Navigation action handlers

use crate::tui::AppState;
use anyhow::Result;

/// Handle navigate up action (toward the highest string, drawn on top)
pub fn handle_navigate_up(state: &mut AppState) -> Result<bool> {
    let last = state.fretboard.table().string_count() - 1;
    if state.cursor.string < last {
        state.cursor.string += 1;
        state.clear_error();
    }
    Ok(false)
}

/// Handle navigate down action
pub fn handle_navigate_down(state: &mut AppState) -> Result<bool> {
    if state.cursor.string > 0 {
        state.cursor.string -= 1;
        state.clear_error();
    }
    Ok(false)
}

/// Handle navigate left action
pub fn handle_navigate_left(state: &mut AppState) -> Result<bool> {
    if state.cursor.fret > 0 {
        state.cursor.fret -= 1;
        state.clear_error();
    }
    Ok(false)
}

/// Handle navigate right action
pub fn handle_navigate_right(state: &mut AppState) -> Result<bool> {
    if state.cursor.fret < state.fretboard.table().fret_count() {
        state.cursor.fret += 1;
        state.clear_error();
    }
    Ok(false)
}

/// Handle jump to first action (open string)
pub fn handle_jump_to_first(state: &mut AppState) -> Result<bool> {
    state.cursor.fret = 0;
    state.clear_error();
    Ok(false)
}

/// Handle jump to last action (highest fret)
pub fn handle_jump_to_last(state: &mut AppState) -> Result<bool> {
    state.cursor.fret = state.fretboard.table().fret_count();
    state.clear_error();
    Ok(false)
}
