//! Action dispatch.

use anyhow::Result;

use crate::shortcuts::Action;
use crate::tui::AppState;

use super::action_handlers::{display, navigation, popups, selection};

/// Dispatch action to appropriate handler
///
/// Returns `true` when the application should exit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // Navigation (6 actions)
        Action::NavigateUp => navigation::handle_navigate_up(state),
        Action::NavigateDown => navigation::handle_navigate_down(state),
        Action::NavigateLeft => navigation::handle_navigate_left(state),
        Action::NavigateRight => navigation::handle_navigate_right(state),
        Action::JumpToFirst => navigation::handle_jump_to_first(state),
        Action::JumpToLast => navigation::handle_jump_to_last(state),

        // Selection (3 actions)
        Action::ToggleCurrent => selection::handle_toggle_current(state),
        Action::ClearAll => selection::handle_clear_all(state),
        Action::CopySelections => selection::handle_copy_selections(state),

        // Display (2 actions)
        Action::ToggleNoteVisibility => display::handle_toggle_notes(state),
        Action::CycleTuning => display::handle_cycle_tuning(state),

        // Help (3 actions)
        Action::ToggleHelp => popups::handle_toggle_help(state),
        Action::ScrollUp | Action::ScrollDown => Ok(false),

        // General (2 actions)
        Action::Cancel => {
            state.status_message.clear();
            state.clear_error();
            Ok(false)
        }
        Action::Quit => {
            tracing::debug!("quit requested");
            state.should_quit = true;
            Ok(true)
        }
    }
}
