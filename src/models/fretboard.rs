//! Fretboard state object and its command interface.
//!
//! `Fretboard` owns the pitch table and the selection. Presenters hold it by
//! value (or `&mut`) and forward user gestures as [`Command`]s; they never
//! mutate the selection directly.

use super::{Pitch, PitchTable, Position, SelectionSet, Toggled, Tuning};
use crate::error::ConfigError;

/// Gestures the presenter forwards into the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle the position at a coordinate taken from the rendered grid
    ToggleAt {
        /// String index
        string: usize,
        /// Fret number
        fret: usize,
    },
    /// Remove every selection
    ClearAll,
    /// Show or hide note labels on the grid
    ToggleVisibility,
}

/// What a command changed, for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A position was added to the selection
    Selected(Position),
    /// A position was removed from the selection
    Deselected(Position),
    /// The selection was cleared; carries how many positions were removed
    Cleared(usize),
    /// Note labels are now shown (`true`) or hidden (`false`)
    VisibilityChanged(bool),
}

/// Pitch table, selection and display flag for one instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fretboard {
    table: PitchTable,
    selections: SelectionSet,
    notes_visible: bool,
}

impl Fretboard {
    /// Builds a fretboard with an empty selection.
    pub fn new(tuning: &Tuning, string_count: usize, fret_count: usize) -> Result<Self, ConfigError> {
        Ok(Self::from_table(Self::build_table(
            tuning,
            string_count,
            fret_count,
        )?))
    }

    /// Wraps an existing table.
    #[must_use]
    pub fn from_table(table: PitchTable) -> Self {
        Self {
            table,
            selections: SelectionSet::new(),
            notes_visible: true,
        }
    }

    /// Builds a pitch table without touching any fretboard state.
    pub fn build_table(
        tuning: &Tuning,
        string_count: usize,
        fret_count: usize,
    ) -> Result<PitchTable, ConfigError> {
        PitchTable::build(tuning, string_count, fret_count)
    }

    /// Applies a presenter command.
    pub fn handle(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::ToggleAt { string, fret } => match self.toggle(string, fret) {
                Toggled::Added(position) => CommandOutcome::Selected(position),
                Toggled::Removed(position) => CommandOutcome::Deselected(position),
            },
            Command::ClearAll => CommandOutcome::Cleared(self.clear()),
            Command::ToggleVisibility => {
                self.notes_visible = !self.notes_visible;
                tracing::debug!(visible = self.notes_visible, "note visibility toggled");
                CommandOutcome::VisibilityChanged(self.notes_visible)
            }
        }
    }

    /// Toggles the position at `(string, fret)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the table.
    pub fn toggle(&mut self, string: usize, fret: usize) -> Toggled {
        let result = self.selections.toggle(&self.table, string, fret);
        tracing::debug!(string, fret, ?result, "toggled position");
        result
    }

    /// Clears the selection. Returns how many positions were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.selections.clear();
        tracing::debug!(removed, "cleared selections");
        removed
    }

    /// Selected positions in the order they were chosen.
    #[must_use]
    pub fn current_selections(&self) -> &[Position] {
        self.selections.positions()
    }

    /// Pitch at a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the table.
    #[must_use]
    pub fn lookup(&self, string: usize, fret: usize) -> Pitch {
        self.table.lookup(string, fret)
    }

    /// Whether a coordinate is currently selected.
    #[must_use]
    pub fn is_selected(&self, string: usize, fret: usize) -> bool {
        self.selections.contains(string, fret)
    }

    /// Rebuilds the table for a new configuration.
    ///
    /// Selections outside the new bounds are dropped; the others keep their
    /// original note snapshot. On error nothing changes.
    pub fn retune(
        &mut self,
        tuning: &Tuning,
        string_count: usize,
        fret_count: usize,
    ) -> Result<usize, ConfigError> {
        let table = Self::build_table(tuning, string_count, fret_count)?;
        let dropped = self
            .selections
            .retain_on(&table);
        self.table = table;
        tracing::info!(tuning = %tuning, strings = string_count, frets = fret_count, dropped, "retuned");
        Ok(dropped)
    }

    /// The current pitch table.
    #[must_use]
    pub fn table(&self) -> &PitchTable {
        &self.table
    }

    /// Whether note labels are shown.
    #[must_use]
    pub fn notes_visible(&self) -> bool {
        self.notes_visible
    }

    /// Sets note label visibility directly (used when loading preferences).
    pub fn set_notes_visible(&mut self, visible: bool) {
        self.notes_visible = visible;
    }
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::from_table(PitchTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TuningPreset;

    #[test]
    fn test_default_configuration() {
        let fretboard = Fretboard::default();
        assert_eq!(fretboard.table().string_count(), 6);
        assert_eq!(fretboard.table().fret_count(), 24);
        assert!(fretboard.current_selections().is_empty());
        assert!(fretboard.notes_visible());
    }

    #[test]
    fn test_toggle_sequence_scenario() {
        let mut fretboard = Fretboard::default();
        fretboard.toggle(0, 0);
        fretboard.toggle(1, 3);
        fretboard.toggle(0, 0);
        assert_eq!(
            fretboard.current_selections(),
            &[Position::new(1, 3, Pitch::C)]
        );
    }

    #[test]
    fn test_handle_commands() {
        let mut fretboard = Fretboard::default();

        let outcome = fretboard.handle(Command::ToggleAt { string: 0, fret: 2 });
        assert_eq!(
            outcome,
            CommandOutcome::Selected(Position::new(0, 2, Pitch::FSharp))
        );

        let outcome = fretboard.handle(Command::ToggleAt { string: 0, fret: 2 });
        assert_eq!(
            outcome,
            CommandOutcome::Deselected(Position::new(0, 2, Pitch::FSharp))
        );

        fretboard.handle(Command::ToggleAt { string: 3, fret: 4 });
        fretboard.handle(Command::ToggleAt { string: 4, fret: 4 });
        assert_eq!(fretboard.handle(Command::ClearAll), CommandOutcome::Cleared(2));
        assert!(fretboard.current_selections().is_empty());

        assert_eq!(
            fretboard.handle(Command::ToggleVisibility),
            CommandOutcome::VisibilityChanged(false)
        );
        assert_eq!(
            fretboard.handle(Command::ToggleVisibility),
            CommandOutcome::VisibilityChanged(true)
        );
    }

    #[test]
    fn test_visibility_does_not_touch_selection() {
        let mut fretboard = Fretboard::default();
        fretboard.toggle(2, 2);
        fretboard.handle(Command::ToggleVisibility);
        assert_eq!(fretboard.current_selections().len(), 1);
    }

    #[test]
    fn test_retune_keeps_snapshots_and_drops_out_of_range() {
        let mut fretboard = Fretboard::default();
        fretboard.toggle(0, 0); // E
        fretboard.toggle(5, 3); // G on high E

        let bass = TuningPreset::Bass.tuning();
        let dropped = fretboard.retune(&bass, 4, 24).unwrap();
        assert_eq!(dropped, 1);
        assert_eq!(
            fretboard.current_selections(),
            &[Position::new(0, 0, Pitch::E)]
        );

        let drop_d = TuningPreset::DropD.tuning();
        fretboard.retune(&drop_d, 6, 24).unwrap();
        // Table changed, snapshot did not
        assert_eq!(fretboard.lookup(0, 0), Pitch::D);
        assert_eq!(fretboard.current_selections()[0].note, Pitch::E);
    }

    #[test]
    fn test_retune_failure_leaves_state_untouched() {
        let mut fretboard = Fretboard::default();
        fretboard.toggle(1, 1);
        let before = fretboard.clone();

        let tuning = Tuning::standard();
        assert!(fretboard.retune(&tuning, 4, 24).is_err());
        assert_eq!(fretboard, before);
    }

    #[test]
    fn test_build_table_is_pure() {
        let table = Fretboard::build_table(&Tuning::standard(), 6, 12).unwrap();
        assert_eq!(table.fret_count(), 12);
        assert_eq!(table.lookup(1, 3), Pitch::C);
    }
}
