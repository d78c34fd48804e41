//! Help overlay widget showing all keyboard shortcuts organized by context.
//!
//! The content is generated from the help registry so the overlay, the
//! status bar hints and the key bindings stay in sync.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

use super::help_registry::HelpRegistry;
use super::Theme;

/// Width of the key column in the overlay.
const KEY_COLUMN: usize = 22;

/// State for the help overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    /// Total number of content lines
    total_lines: usize,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new(registry: &HelpRegistry) -> Self {
        let total_lines = HelpOverlay::content(registry, &Theme::default()).len();
        Self {
            scroll_offset: 0,
            total_lines,
        }
    }

    /// Scroll up by one line.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }
}

/// Help overlay renderer.
pub struct HelpOverlay;

impl HelpOverlay {
    /// Builds the overlay lines from the registry.
    #[must_use]
    pub fn content(registry: &HelpRegistry, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} - Keyboard Shortcuts", registry.app_name()),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for context in registry.ordered_contexts() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("=== {} ===", context.name.to_uppercase()),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", context.description),
                    Style::default().fg(theme.text_muted),
                ),
            ]));

            let mut bindings: Vec<_> = context.bindings.iter().collect();
            bindings.sort_by_key(|b| b.priority);
            for binding in bindings {
                let (keys, action) = HelpRegistry::format_binding_for_help(binding);
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {keys:<KEY_COLUMN$}"),
                        Style::default().fg(theme.success),
                    ),
                    Span::styled(action, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines
    }

    /// Render the overlay centered over `area`.
    pub fn render(
        state: &HelpOverlayState,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        registry: &HelpRegistry,
    ) {
        let modal_area = super::centered_rect(70, 80, area);
        frame.render_widget(Clear, modal_area);

        // Create layout for content area and scrollbar
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        let content = Self::content(registry, theme);
        let visible_height = content_area.height.saturating_sub(2) as usize;

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help - Esc to close ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .wrap(Wrap { trim: false })
            .scroll((state.scroll_offset as u16, 0));

        frame.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.primary));

        let mut scrollbar_state =
            ScrollbarState::new(state.total_lines.saturating_sub(visible_height))
                .position(state.scroll_offset);

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}
