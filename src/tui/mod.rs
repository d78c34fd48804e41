//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]

pub mod fretboard_widget;
pub mod handlers;
pub mod help_overlay;
pub mod help_registry;
pub mod selection_list;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::models::{Fretboard, TuningPreset};
use crate::shortcuts::ShortcutRegistry;

// Re-export commonly used types
pub use fretboard_widget::{FretboardWidget, GridGeometry};
pub use help_overlay::{HelpOverlay, HelpOverlayState};
pub use help_registry::HelpRegistry;
pub use selection_list::SelectionList;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Grid cursor (the cell keyboard actions apply to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// String index, 0 = lowest string
    pub string: usize,
    /// Fret number, 0 = open string
    pub fret: usize,
}

/// Screen areas of the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Title bar
    pub title: Rect,
    /// Fretboard grid
    pub grid: Rect,
    /// Selected positions panel
    pub selections: Rect,
    /// Status bar
    pub status: Rect,
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Pitch table, selection and note visibility
    pub fretboard: Fretboard,
    /// Preset the current tuning came from, if any
    pub preset: Option<TuningPreset>,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Grid cursor
    pub cursor: Cursor,
    /// Help overlay, when open
    pub help: Option<HelpOverlayState>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // System resources
    /// Application configuration
    pub config: Config,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    /// Key binding descriptions for hints and the help overlay
    pub help_registry: HelpRegistry,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` from config and a built fretboard.
    ///
    /// # Errors
    ///
    /// Returns error if the embedded help definitions fail to parse
    pub fn new(fretboard: Fretboard, config: Config) -> Result<Self> {
        let help_registry = HelpRegistry::load().context("Failed to load help definitions")?;
        let preset = TuningPreset::matching(fretboard.table().tuning());
        let help = config
            .ui
            .show_help_on_startup
            .then(|| HelpOverlayState::new(&help_registry));

        Ok(Self {
            fretboard,
            preset,
            theme: Theme::from_mode(config.ui.theme_mode),
            cursor: Cursor::default(),
            help,
            status_message: "Press Space to select a position, ? for help".to_string(),
            error_message: None,
            config,
            shortcuts: ShortcutRegistry::new(),
            help_registry,
            should_quit: false,
        })
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        tracing::warn!(%error, "tui error");
        self.error_message = Some(error);
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Keeps the cursor inside the current table after a retune.
    pub fn clamp_cursor(&mut self) {
        let table = self.fretboard.table();
        self.cursor.string = self.cursor.string.min(table.string_count() - 1);
        self.cursor.fret = self.cursor.fret.min(table.fret_count());
    }

    /// Short description of the current tuning for the title bar.
    #[must_use]
    pub fn tuning_label(&self) -> String {
        let tuning = self.fretboard.table().tuning();
        match self.preset {
            Some(preset) => format!("{preset} ({tuning})"),
            None => format!("Custom ({tuning})"),
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui<B: Backend>(state: &mut AppState, terminal: &mut Terminal<B>) -> Result<()> {
    loop {
        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Windows reports both press and release
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse)
                    if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) =>
                {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    handlers::handle_mouse_click(state, area, mouse.column, mouse.row)?;
                }
                // Resize and everything else re-renders on the next loop
                _ => {}
            }
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Splits the screen into the main view areas.
///
/// Rendering and mouse hit-testing both go through this function, so a click
/// always lands on the cell that was drawn under it.
#[must_use]
pub fn main_layout(area: Rect) -> AppLayout {
    let rows = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(8),    // Main content
            Constraint::Length(4), // Status bar (message + help line)
        ])
        .split(area);

    let columns = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(rows[1]);

    AppLayout {
        title: rows[0],
        grid: columns[0],
        selections: columns[1],
        status: rows[2],
    }
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    // This ensures consistent background regardless of terminal settings
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let layout = main_layout(f.area());

    render_title_bar(f, layout.title, state);
    FretboardWidget::render(f, layout.grid, state);
    SelectionList::render(f, layout.selections, state);
    StatusBar::render(f, layout.status, state, &state.theme);

    if let Some(help) = &state.help {
        HelpOverlay::render(help, f, f.area(), &state.theme, &state.help_registry);
    }
}

/// Render title bar with tuning and instrument dimensions
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let table = state.fretboard.table();
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", crate::constants::APP_NAME),
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("- ", Style::default().fg(state.theme.text_muted)),
        Span::styled(state.tuning_label(), Style::default().fg(state.theme.text)),
        Span::styled(
            format!(
                " - {} strings, {} frets",
                table.string_count(),
                table.fret_count()
            ),
            Style::default().fg(state.theme.text_muted),
        ),
    ]);

    let title_widget = Paragraph::new(title)
        .style(Style::default().bg(state.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Helper to create a centered rectangle
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
///
/// Returns `true` when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    // Route to the help overlay if it is open
    if state.help.is_some() {
        return handlers::handle_help_input(state, key);
    }

    // Main UI key handling
    handlers::handle_main_input(state, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tuning;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn state() -> AppState {
        AppState::new(Fretboard::default(), Config::default()).unwrap()
    }

    fn press(state: &mut AppState, code: KeyCode) -> bool {
        handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_new_state_detects_preset() {
        let state = state();
        assert_eq!(state.preset, Some(TuningPreset::Standard));
        assert_eq!(state.cursor, Cursor::default());
        assert!(state.help.is_none());
        assert!(state.tuning_label().starts_with("Standard"));
    }

    #[test]
    fn test_custom_tuning_label() {
        let tuning = Tuning::from_names(&["C", "G", "D", "A"]).unwrap();
        let fretboard = Fretboard::new(&tuning, 4, 12).unwrap();
        let state = AppState::new(fretboard, Config::default()).unwrap();
        assert_eq!(state.preset, None);
        assert_eq!(state.tuning_label(), "Custom (C G D A)");
    }

    #[test]
    fn test_help_on_startup() {
        let mut config = Config::default();
        config.ui.show_help_on_startup = true;
        let state = AppState::new(Fretboard::default(), config).unwrap();
        assert!(state.help.is_some());
    }

    #[test]
    fn test_main_layout_partitions_screen() {
        let layout = main_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.title.height, 3);
        assert_eq!(layout.status.height, 4);
        assert_eq!(layout.grid.y, 3);
        assert_eq!(layout.grid.height, 23);
        assert_eq!(layout.selections.width, 22);
        assert_eq!(layout.grid.width + layout.selections.width, 100);
    }

    #[test]
    fn test_toggle_and_quit_through_keys() {
        let mut state = state();
        assert!(!press(&mut state, KeyCode::Right));
        assert!(!press(&mut state, KeyCode::Char(' ')));
        assert_eq!(state.fretboard.current_selections().len(), 1);
        assert!(state.fretboard.is_selected(0, 1));

        assert!(press(&mut state, KeyCode::Char('q')));
        assert!(state.should_quit);
    }

    #[test]
    fn test_help_overlay_captures_keys() {
        let mut state = state();
        press(&mut state, KeyCode::Char('?'));
        assert!(state.help.is_some());

        // Space is not bound in help; nothing is toggled
        press(&mut state, KeyCode::Char(' '));
        assert!(state.fretboard.current_selections().is_empty());

        press(&mut state, KeyCode::Esc);
        assert!(state.help.is_none());
    }

    #[test]
    fn test_render_shows_grid_and_selection() {
        let mut state = state();
        state.fretboard.toggle(1, 3);
        let screen = draw(&state, 100, 20);

        assert!(screen.contains("Fretview"));
        assert!(screen.contains("Standard (E A D G B E)"));
        assert!(screen.contains("Selected (1)"));
        assert!(screen.contains("[2 : 3] C"));
        // Fret markers in the header row
        assert!(screen.contains(" 3 "));
        assert!(screen.contains("12"));
    }

    #[test]
    fn test_render_hidden_notes() {
        let mut state = state();
        state.fretboard.set_notes_visible(false);
        let screen = draw(&state, 100, 20);
        assert!(!screen.contains(" F# "));
    }
}
