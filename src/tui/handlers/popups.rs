//! Popup input handlers.

use anyhow::Result;
use crossterm::event;

use crate::shortcuts::{Action, HELP_CONTEXT};
use crate::tui::AppState;

/// Handle input for help overlay
pub fn handle_help_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.shortcuts.lookup(HELP_CONTEXT, key) {
        Some(Action::ScrollUp) => {
            if let Some(help) = state.help.as_mut() {
                help.scroll_up();
            }
            Ok(false)
        }
        Some(Action::ScrollDown) => {
            if let Some(help) = state.help.as_mut() {
                help.scroll_down();
            }
            Ok(false)
        }
        Some(Action::ToggleHelp | Action::Cancel) => {
            state.help = None;
            state.set_status("Press ? for help");
            Ok(false)
        }
        Some(Action::Quit) => super::dispatch_action(state, Action::Quit),
        // Everything else is swallowed while help is open
        _ => Ok(false),
    }
}
