//! Panel listing the selected positions in selection order.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::models::Position;

/// Selected positions widget
pub struct SelectionList;

impl SelectionList {
    /// Render the list. When it overflows, the most recent entries are kept.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let positions = state.fretboard.current_selections();

        let lines: Vec<Line> = if positions.is_empty() {
            vec![Line::from(Span::styled(
                "Nothing selected",
                Style::default().fg(theme.text_muted),
            ))]
        } else {
            let visible = area.height.saturating_sub(2) as usize;
            let skip = positions.len().saturating_sub(visible);
            positions[skip..]
                .iter()
                .map(|position| {
                    let style = if position.is_at(state.cursor.string, state.cursor.fret) {
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(theme.text)
                    };
                    Line::from(Span::styled(Self::entry(position), style))
                })
                .collect()
        };

        let list = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .title(format!(" Selected ({}) ", positions.len()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );

        f.render_widget(list, area);
    }

    /// One list entry: `[string+1 : fret] NOTE`.
    #[must_use]
    pub fn entry(position: &Position) -> String {
        position.to_string()
    }

    /// The whole list as plain text, one entry per line.
    #[must_use]
    pub fn as_text(positions: &[Position]) -> String {
        positions
            .iter()
            .map(Self::entry)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
