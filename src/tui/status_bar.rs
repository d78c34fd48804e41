//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::help_registry::contexts;
use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        // First line: error, status message, or cursor readout
        let message_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ])
        } else if !state.status_message.is_empty() {
            Line::from(state.status_message.clone())
        } else {
            Self::cursor_line(state, theme)
        };

        let status_text = vec![message_line, Self::get_contextual_help_line(state, theme)];

        let status = Paragraph::new(status_text)
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Cursor position and the note under it.
    fn cursor_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let cursor = state.cursor;
        let pitch = state.fretboard.lookup(cursor.string, cursor.fret);
        Line::from(vec![
            Span::styled("Cursor: ", Style::default().fg(theme.primary)),
            Span::raw(format!(
                "string {} fret {} ({pitch})",
                cursor.string + 1,
                cursor.fret
            )),
        ])
    }

    /// Get the current context name based on application state
    const fn get_current_context(state: &AppState) -> &'static str {
        if state.help.is_some() {
            contexts::HELP
        } else {
            contexts::MAIN
        }
    }

    /// Get contextual help line from help registry (bottom help line)
    fn get_contextual_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let context_name = Self::get_current_context(state);
        let hints = state.help_registry.format_status_bar_hints(context_name, 6);

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));

        if hints.is_empty() {
            spans.push(Span::raw("Press ? for help"));
            return Line::from(spans);
        }

        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(action));
        }

        // Always add "?: Help" at the end for main context
        if context_name == contexts::MAIN {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("?", Style::default().fg(theme.accent)));
            spans.push(Span::raw(": Help"));
        }

        Line::from(spans)
    }
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
    fn test_cursor_line_names_the_note() {
        let mut state = state();
        state.cursor.string = 1;
        state.cursor.fret = 3;
        let line = StatusBar::cursor_line(&state, &state.theme).to_string();
        assert_eq!(line, "Cursor: string 2 fret 3 (C)");
    }

    #[test]
    fn test_help_line_follows_context() {
        let mut state = state();
        let main = StatusBar::get_contextual_help_line(&state, &state.theme).to_string();
        assert!(main.contains("Space: Toggle"));
        assert!(main.ends_with("?: Help"));

        state.help = Some(super::super::HelpOverlayState::new(&state.help_registry));
        let help = StatusBar::get_contextual_help_line(&state, &state.theme).to_string();
        assert!(help.contains("Esc: Close"));
        assert!(!help.contains("Toggle"));
    }
}
