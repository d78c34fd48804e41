// Selection action handlers

use crate::models::{Command, CommandOutcome};
use crate::tui::{AppState, SelectionList};
use anyhow::Result;

/// Handle toggle current action
pub fn handle_toggle_current(state: &mut AppState) -> Result<bool> {
    let outcome = state.fretboard.handle(Command::ToggleAt {
        string: state.cursor.string,
        fret: state.cursor.fret,
    });
    report(state, outcome);
    Ok(false)
}

/// Handle clear all action
pub fn handle_clear_all(state: &mut AppState) -> Result<bool> {
    let outcome = state.fretboard.handle(Command::ClearAll);
    report(state, outcome);
    Ok(false)
}

/// Handle copy selections action
pub fn handle_copy_selections(state: &mut AppState) -> Result<bool> {
    let positions = state.fretboard.current_selections();
    if positions.is_empty() {
        state.set_status("Nothing selected to copy");
        return Ok(false);
    }

    let count = positions.len();
    let text = SelectionList::as_text(positions);
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => state.set_status(format!("Copied {count} position(s) to clipboard")),
        Err(e) => state.set_error(format!("Failed to copy to clipboard: {e}")),
    }
    Ok(false)
}

/// Writes a status message describing what a command changed.
pub fn report(state: &mut AppState, outcome: CommandOutcome) {
    let message = match outcome {
        CommandOutcome::Selected(position) => format!("Selected {position}"),
        CommandOutcome::Deselected(position) => format!("Deselected {position}"),
        CommandOutcome::Cleared(0) => "Nothing to clear".to_string(),
        CommandOutcome::Cleared(count) => format!("Cleared {count} position(s)"),
        CommandOutcome::VisibilityChanged(true) => "Note names shown".to_string(),
        CommandOutcome::VisibilityChanged(false) => "Note names hidden".to_string(),
    };
    state.set_status(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::Fretboard;

    fn state() -> AppState {
        AppState::new(Fretboard::default(), Config::default()).unwrap()
    }

    #[test]
    fn test_toggle_current_reports() {
        let mut state = state();
        state.cursor.string = 1;
        state.cursor.fret = 3;

        handle_toggle_current(&mut state).unwrap();
        assert_eq!(state.status_message, "Selected [2 : 3] C");

        handle_toggle_current(&mut state).unwrap();
        assert_eq!(state.status_message, "Deselected [2 : 3] C");
        assert!(state.fretboard.current_selections().is_empty());
    }

    #[test]
    fn test_clear_all_reports_count() {
        let mut state = state();
        handle_clear_all(&mut state).unwrap();
        assert_eq!(state.status_message, "Nothing to clear");

        state.fretboard.toggle(0, 0);
        state.fretboard.toggle(2, 5);
        handle_clear_all(&mut state).unwrap();
        assert_eq!(state.status_message, "Cleared 2 position(s)");
        assert!(state.fretboard.current_selections().is_empty());
    }

    #[test]
    fn test_copy_with_empty_selection() {
        let mut state = state();
        handle_copy_selections(&mut state).unwrap();
        assert_eq!(state.status_message, "Nothing selected to copy");
        assert!(state.error_message.is_none());
    }
}
