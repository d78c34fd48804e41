//! Integration tests for the terminal UI, driven through key events and
//! rendered with ratatui's test backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fretview::config::Config;
use fretview::models::{Fretboard, Pitch, TuningPreset};
use fretview::tui::{self, AppState};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

mod fixtures;
use fixtures::*;

fn app() -> AppState {
    AppState::new(standard_fretboard(), Config::default()).unwrap()
}

fn keys(state: &mut AppState, codes: &[KeyCode]) {
    for code in codes {
        tui::handle_key_event(state, KeyEvent::new(*code, KeyModifiers::NONE)).unwrap();
    }
}

fn screen(state: &AppState, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| tui::render(f, state)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

#[test]
fn test_keyboard_selection_flow() {
    let mut state = app();

    // Up to string 2 (A), right three frets: C
    keys(
        &mut state,
        &[KeyCode::Char('k'), KeyCode::Right, KeyCode::Right, KeyCode::Right, KeyCode::Enter],
    );
    // Back to the open low E and select it
    keys(&mut state, &[KeyCode::Char('j'), KeyCode::Home, KeyCode::Char(' ')]);

    let selections = state.fretboard.current_selections();
    assert_eq!(selections.len(), 2);
    assert_eq!(selections[0].note, Pitch::C);
    assert_eq!(selections[1].note, Pitch::E);

    keys(&mut state, &[KeyCode::Char('c')]);
    assert!(state.fretboard.current_selections().is_empty());
}

#[test]
fn test_selection_panel_lists_positions() {
    let mut state = app();
    state.fretboard.toggle(1, 3);
    state.fretboard.toggle(0, 2);

    let lines = screen(&state, 100, 24);
    let text = lines.join("\n");
    assert!(text.contains("Selected (2)"));

    let first = lines.iter().position(|l| l.contains("[2 : 3] C")).unwrap();
    let second = lines.iter().position(|l| l.contains("[1 : 2] F#")).unwrap();
    assert!(first < second, "entries render in selection order");
}

#[test]
fn test_grid_draws_highest_string_on_top() {
    let state = app();
    let lines = screen(&state, 100, 24);
    let layout = tui::main_layout(Rect::new(0, 0, 100, 24));

    // Border, header, then string 6
    let top_string = &lines[layout.grid.y as usize + 2];
    let bottom_string = &lines[layout.grid.y as usize + 7];
    assert!(top_string.contains(" 6   E   F "));
    assert!(bottom_string.contains(" 1   E   F "));

    let second_from_bottom = &lines[layout.grid.y as usize + 6];
    assert!(second_from_bottom.contains(" 2   A   A#  B   C "));
}

#[test]
fn test_grid_scrolls_with_cursor() {
    let mut state = app();
    keys(&mut state, &[KeyCode::End]);
    assert_eq!(state.cursor.fret, 24);

    let text = screen(&state, 60, 24).join("\n");
    assert!(text.contains("Fretboard (frets"));
    assert!(text.contains("24"));
}

#[test]
fn test_grid_scrolls_strings_in_short_window() {
    let tuning = TuningPreset::SevenString.tuning();
    let fretboard = Fretboard::new(&tuning, 7, 24).unwrap();
    let mut state = AppState::new(fretboard, Config::default()).unwrap();

    // Five string rows fit; the cursor starts on the lowest string
    let text = screen(&state, 100, 15).join("\n");
    assert!(text.contains(" 1   B  "));
    assert!(!text.contains(" 7   E  "));

    keys(&mut state, &[KeyCode::Up; 6]);
    assert_eq!(state.cursor.string, 6);
    let text = screen(&state, 100, 15).join("\n");
    assert!(text.contains(" 7   E  "));
    assert!(!text.contains(" 1   B  "));
}

#[test]
fn test_note_visibility_toggle_hides_labels() {
    let mut state = app();
    keys(&mut state, &[KeyCode::Char('v')]);
    assert!(!state.fretboard.notes_visible());

    let lines = screen(&state, 100, 24);
    let layout = tui::main_layout(Rect::new(0, 0, 100, 24));
    let bottom_string = &lines[layout.grid.y as usize + 7];
    assert!(!bottom_string.contains('F'));
}

#[test]
fn test_cycle_tuning_updates_title() {
    let mut state = app();
    keys(&mut state, &[KeyCode::Char('t')]);
    assert_eq!(state.preset, Some(TuningPreset::DropD));

    let text = screen(&state, 100, 24).join("\n");
    assert!(text.contains("Drop D (D A D G B E)"));
}

#[test]
fn test_help_overlay_renders_and_closes() {
    let mut state = app();
    keys(&mut state, &[KeyCode::Char('?')]);
    let text = screen(&state, 100, 30).join("\n");
    assert!(text.contains("Keyboard Shortcuts"));

    keys(&mut state, &[KeyCode::Down, KeyCode::Esc]);
    assert!(state.help.is_none());
    let text = screen(&state, 100, 30).join("\n");
    assert!(!text.contains("Keyboard Shortcuts"));
}

#[test]
fn test_mouse_click_selects_cell() {
    let mut state = app();
    let screen_area = Rect::new(0, 0, 100, 24);
    let layout = tui::main_layout(screen_area);
    let geometry = tui::GridGeometry::compute(layout.grid, &state.fretboard, state.cursor);

    // String 3 (D), fret 5 -> G
    let x = geometry.inner.x + 4 + 5 * 4 + 1;
    let y = geometry.row_of(2);
    tui::handlers::handle_mouse_click(&mut state, screen_area, x, y).unwrap();

    assert_eq!(state.fretboard.current_selections().len(), 1);
    assert_eq!(state.fretboard.current_selections()[0].note, Pitch::G);
    assert_eq!((state.cursor.string, state.cursor.fret), (2, 5));
}

#[test]
fn test_quit_keys() {
    for event in [
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
    ] {
        let mut state = app();
        assert!(tui::handle_key_event(&mut state, event).unwrap());
        assert!(state.should_quit);
    }
}
