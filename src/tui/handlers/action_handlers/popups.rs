// Popup management action handlers

use crate::tui::{AppState, HelpOverlayState};
use anyhow::Result;

/// Handle toggle help action
pub fn handle_toggle_help(state: &mut AppState) -> Result<bool> {
    if state.help.is_some() {
        state.help = None;
    } else {
        state.help = Some(HelpOverlayState::new(&state.help_registry));
        state.set_status("Help - Up/Down: scroll, Esc: close");
    }
    Ok(false)
}
