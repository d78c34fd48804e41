//! Fretboard widget: the grid of note cells.
//!
//! Layout inside the bordered block:
//!
//! ```text
//!       3   5   7   9  12        <- fret markers (header row)
//!   6  E   F   F#  G   G# ...    <- highest string first
//!   ...
//!   1  E   F   F#  G   G# ...
//! ```
//!
//! The grid scrolls horizontally and vertically so the cursor cell is always
//! visible.
//! [`GridGeometry`] is shared by rendering and mouse hit-testing.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Cursor, Theme};
use crate::constants::FRET_MARKERS;
use crate::models::Fretboard;

/// Width of the string-number column.
pub const LABEL_WIDTH: u16 = 4;
/// Width of one fret cell.
pub const CELL_WIDTH: u16 = 4;

/// Screen placement of the grid for a given area and cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Area inside the border
    pub inner: Rect,
    /// First fret drawn in the leftmost column
    pub first_fret: usize,
    /// Number of fret columns drawn
    pub visible_frets: usize,
    /// Rows scrolled off the top, counting from the highest string
    pub first_row: usize,
    /// Number of string rows drawn
    pub visible_strings: usize,
    /// Number of strings on the instrument
    pub string_count: usize,
}

impl GridGeometry {
    /// Computes the geometry for the block occupying `area`.
    #[must_use]
    pub fn compute(area: Rect, fretboard: &Fretboard, cursor: Cursor) -> Self {
        let inner = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let columns = fretboard.table().fret_count() + 1;
        let fit = (inner.width.saturating_sub(LABEL_WIDTH) / CELL_WIDTH).max(1) as usize;
        let visible_frets = fit.min(columns);

        let first_fret = scroll_offset(cursor.fret, visible_frets);

        // One line is taken by the fret header
        let string_count = fretboard.table().string_count();
        let fit_rows = (inner.height.saturating_sub(1) as usize).max(1);
        let visible_strings = fit_rows.min(string_count);
        let cursor_row = string_count - 1 - cursor.string.min(string_count - 1);
        let first_row = scroll_offset(cursor_row, visible_strings);

        Self {
            inner,
            first_fret,
            visible_frets,
            first_row,
            visible_strings,
            string_count,
        }
    }

    /// Screen row of a string (highest string on top, below the header).
    ///
    /// Only meaningful for strings in [`GridGeometry::strings`].
    #[must_use]
    pub fn row_of(&self, string: usize) -> u16 {
        self.inner.y + 1 + (self.string_count - 1 - string - self.first_row) as u16
    }

    /// Strings drawn, highest first.
    pub fn strings(&self) -> impl Iterator<Item = usize> {
        let top = self.string_count - 1 - self.first_row;
        (0..self.visible_strings).map(move |row| top - row)
    }

    /// Maps a terminal cell to the `(string, fret)` drawn there.
    #[must_use]
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let grid_top = self.inner.y + 1;
        let grid_left = self.inner.x + LABEL_WIDTH;
        if row < grid_top || column < grid_left {
            return None;
        }

        let row_idx = (row - grid_top) as usize;
        if row_idx >= self.visible_strings || row >= self.inner.y + self.inner.height {
            return None;
        }

        let col_idx = ((column - grid_left) / CELL_WIDTH) as usize;
        if col_idx >= self.visible_frets || column >= self.inner.x + self.inner.width {
            return None;
        }

        let string = self.string_count - 1 - (self.first_row + row_idx);
        Some((string, self.first_fret + col_idx))
    }

    fn frets(&self) -> std::ops::Range<usize> {
        self.first_fret..self.first_fret + self.visible_frets
    }
}

/// First index to draw so that `cursor` falls inside a window of `visible`.
const fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if cursor < visible {
        0
    } else {
        cursor + 1 - visible
    }
}

/// Fretboard widget renders the note grid.
pub struct FretboardWidget;

impl FretboardWidget {
    /// Render the fretboard grid.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let fretboard = &state.fretboard;
        let geometry = GridGeometry::compute(area, fretboard, state.cursor);

        let mut lines = Vec::with_capacity(geometry.visible_strings + 1);
        lines.push(Self::header_line(&geometry, theme));

        for string in geometry.strings() {
            lines.push(Self::string_line(string, &geometry, state));
        }

        let title = if geometry.first_fret > 0 {
            format!(" Fretboard (frets {}+) ", geometry.first_fret)
        } else {
            " Fretboard ".to_string()
        };

        let grid = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            );

        f.render_widget(grid, area);
    }

    /// Header row: fret numbers above marker frets.
    fn header_line(geometry: &GridGeometry, theme: &Theme) -> Line<'static> {
        let mut spans = vec![Span::raw(" ".repeat(LABEL_WIDTH as usize))];
        for fret in geometry.frets() {
            let text = if FRET_MARKERS.contains(&fret) {
                format!(" {fret:<3}")
            } else {
                " ".repeat(CELL_WIDTH as usize)
            };
            spans.push(Span::styled(text, Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }

    /// One string: label followed by a cell per visible fret.
    fn string_line(string: usize, geometry: &GridGeometry, state: &AppState) -> Line<'static> {
        let theme = &state.theme;
        let fretboard = &state.fretboard;

        let mut spans = vec![Span::styled(
            format!("{:>2}  ", string + 1),
            Style::default().fg(theme.primary),
        )];

        for fret in geometry.frets() {
            let text = Self::cell_text(fretboard, string, fret);
            let style = Self::cell_style(state, string, fret);
            spans.push(Span::styled(text, style));
        }

        Line::from(spans)
    }

    /// Cell contents, padded to `CELL_WIDTH`.
    #[must_use]
    pub fn cell_text(fretboard: &Fretboard, string: usize, fret: usize) -> String {
        if fretboard.notes_visible() {
            format!(" {:<2} ", fretboard.lookup(string, fret).name())
        } else if fret == 0 {
            " ·  ".to_string()
        } else {
            " -  ".to_string()
        }
    }

    fn cell_style(state: &AppState, string: usize, fret: usize) -> Style {
        let theme = &state.theme;
        let is_cursor = state.cursor.string == string && state.cursor.fret == fret;
        let is_selected = state.fretboard.is_selected(string, fret);

        match (is_cursor, is_selected) {
            (true, true) => Style::default()
                .fg(theme.selected_fg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            (true, false) => Style::default().fg(theme.background).bg(theme.accent),
            (false, true) => Style::default()
                .fg(theme.selected_fg)
                .bg(theme.selected_bg)
                .add_modifier(Modifier::BOLD),
            (false, false) if fret == 0 => Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
            (false, false) => Style::default().fg(theme.text),
        }
    }
}
