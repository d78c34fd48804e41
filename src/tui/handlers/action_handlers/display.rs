// Display action handlers: note labels and tuning presets

use crate::models::{Command, TuningPreset};
use crate::tui::AppState;
use anyhow::Result;

use super::selection::report;

/// Handle toggle note visibility action
pub fn handle_toggle_notes(state: &mut AppState) -> Result<bool> {
    let outcome = state.fretboard.handle(Command::ToggleVisibility);
    report(state, outcome);
    Ok(false)
}

/// Handle cycle tuning action
///
/// A custom tuning cycles to the first preset. The fret count is kept; the
/// string count follows the preset.
pub fn handle_cycle_tuning(state: &mut AppState) -> Result<bool> {
    let next = state.preset.map_or(TuningPreset::default(), TuningPreset::next);
    let tuning = next.tuning();
    let frets = state.fretboard.table().fret_count();

    match state.fretboard.retune(&tuning, tuning.len(), frets) {
        Ok(dropped) => {
            state.preset = Some(next);
            state.clamp_cursor();
            let mut message = format!("Tuning: {next} ({tuning})");
            if dropped > 0 {
                message.push_str(&format!(", {dropped} selection(s) off the board removed"));
            }
            state.set_status(message);
        }
        Err(e) => state.set_error(format!("Cannot switch to {next}: {e}")),
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{Fretboard, Pitch, Tuning};

    fn state() -> AppState {
        AppState::new(Fretboard::default(), Config::default()).unwrap()
    }

    #[test]
    fn test_toggle_notes() {
        let mut state = state();
        handle_toggle_notes(&mut state).unwrap();
        assert!(!state.fretboard.notes_visible());
        assert_eq!(state.status_message, "Note names hidden");
        handle_toggle_notes(&mut state).unwrap();
        assert!(state.fretboard.notes_visible());
    }

    #[test]
    fn test_cycle_tuning_advances_preset() {
        let mut state = state();
        handle_cycle_tuning(&mut state).unwrap();
        assert_eq!(state.preset, Some(TuningPreset::DropD));
        assert_eq!(state.fretboard.lookup(0, 0), Pitch::D);
        assert_eq!(state.fretboard.table().fret_count(), 24);
        assert!(state.status_message.starts_with("Tuning: "));
    }

    #[test]
    fn test_cycle_to_fewer_strings_clamps_cursor_and_prunes() {
        let mut state = state();
        state.preset = Some(TuningPreset::HalfStepDown);
        state.cursor.string = 5;
        state.fretboard.toggle(5, 0);
        state.fretboard.toggle(0, 0);

        handle_cycle_tuning(&mut state).unwrap();
        assert_eq!(state.preset, Some(TuningPreset::Bass));
        assert_eq!(state.fretboard.table().string_count(), 4);
        assert_eq!(state.cursor.string, 3);
        assert_eq!(state.fretboard.current_selections().len(), 1);
        assert!(state.status_message.contains("1 selection(s)"));
    }

    #[test]
    fn test_custom_tuning_cycles_to_first_preset() {
        let tuning = Tuning::from_names(&["C", "G", "D", "A"]).unwrap();
        let fretboard = Fretboard::new(&tuning, 4, 12).unwrap();
        let mut state = AppState::new(fretboard, Config::default()).unwrap();

        handle_cycle_tuning(&mut state).unwrap();
        assert_eq!(state.preset, Some(TuningPreset::Standard));
        assert_eq!(state.fretboard.table().string_count(), 6);
        assert_eq!(state.fretboard.table().fret_count(), 12);
    }
}
