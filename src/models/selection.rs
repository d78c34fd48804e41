//! Selected fretboard positions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Pitch, PitchTable};

/// A selected coordinate with the pitch it had when it was selected.
///
/// `note` is a snapshot; it is not recomputed if the table is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// String index (0 = lowest string)
    pub string: usize,
    /// Fret number (0 = open string)
    pub fret: usize,
    /// Pitch at this coordinate when selected
    pub note: Pitch,
}

impl Position {
    /// Creates a position with an explicit note.
    #[must_use]
    pub const fn new(string: usize, fret: usize, note: Pitch) -> Self {
        Self { string, fret, note }
    }

    /// Whether this position sits at the given coordinate.
    #[must_use]
    pub const fn is_at(&self, string: usize, fret: usize) -> bool {
        self.string == string && self.fret == fret
    }
}

/// `[string+1 : fret] NOTE`, the same label the selection panel shows.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} : {}] {}", self.string + 1, self.fret, self.note)
    }
}

/// Result of a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    /// The coordinate was absent and has been appended
    Added(Position),
    /// The coordinate was present and has been removed
    Removed(Position),
}

/// Ordered set of positions, unique by `(string, fret)`.
///
/// Insertion order is preserved for display. The set is bounded by the
/// table size, so membership uses a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionSet {
    positions: Vec<Position>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Adds the coordinate if absent, removes it if present.
    ///
    /// Matching is by coordinate only, never by pitch. Removal keeps the
    /// order of the remaining entries.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is being added and lies outside `table`.
    pub fn toggle(&mut self, table: &PitchTable, string: usize, fret: usize) -> Toggled {
        if let Some(idx) = self.index_of(string, fret) {
            Toggled::Removed(self.positions.remove(idx))
        } else {
            let position = Position::new(string, fret, table.lookup(string, fret));
            self.positions.push(position);
            Toggled::Added(position)
        }
    }

    /// Removes every position. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.positions.len();
        self.positions.clear();
        count
    }

    /// Current positions in insertion order.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Iterates over positions in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }

    /// Whether the coordinate is selected.
    #[must_use]
    pub fn contains(&self, string: usize, fret: usize) -> bool {
        self.index_of(string, fret).is_some()
    }

    /// Number of selected positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Drops positions that fall off `table`, keeping the others and
    /// their note snapshots. Returns how many were dropped.
    pub fn retain_on(&mut self, table: &PitchTable) -> usize {
        let before = self.positions.len();
        self.positions.retain(|p| table.contains(p.string, p.fret));
        before - self.positions.len()
    }

    fn index_of(&self, string: usize, fret: usize) -> Option<usize> {
        self.positions.iter().position(|p| p.is_at(string, fret))
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn table() -> PitchTable {
        PitchTable::default()
    }

    #[test]
    fn test_toggle_adds_with_resolved_note() {
        let table = table();
        let mut set = SelectionSet::new();
        let result = set.toggle(&table, 0, 2);
        assert_eq!(result, Toggled::Added(Position::new(0, 2, Pitch::FSharp)));
        assert_eq!(set.positions(), &[Position::new(0, 2, Pitch::FSharp)]);
    }

    #[test]
    fn test_toggle_twice_restores_previous_state() {
        let table = table();
        let mut set = SelectionSet::new();
        set.toggle(&table, 2, 5);
        set.toggle(&table, 4, 0);
        let before = set.clone();

        set.toggle(&table, 3, 7);
        set.toggle(&table, 3, 7);
        assert_eq!(set, before);

        // Removing and re-adding an existing entry moves it to the end
        set.toggle(&table, 2, 5);
        set.toggle(&table, 2, 5);
        assert_eq!(set.len(), 2);
        assert!(set.positions()[1].is_at(2, 5));
    }

    #[test]
    fn test_removal_preserves_order() {
        let table = table();
        let mut set = SelectionSet::new();
        for fret in 0..5 {
            set.toggle(&table, 1, fret);
        }
        set.toggle(&table, 1, 2);
        let frets: Vec<usize> = set.iter().map(|p| p.fret).collect();
        assert_eq!(frets, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_same_pitch_different_coordinate_is_distinct() {
        let table = table();
        let mut set = SelectionSet::new();
        // Low E open and high E open share a pitch
        set.toggle(&table, 0, 0);
        set.toggle(&table, 5, 0);
        assert_eq!(set.len(), 2);
        assert_eq!(set.positions()[0].note, set.positions()[1].note);
    }

    #[test]
    fn test_uniqueness_after_arbitrary_toggles() {
        let table = table();
        let mut set = SelectionSet::new();
        // Deterministic pseudo-random walk over the grid
        let mut seed: usize = 17;
        for _ in 0..500 {
            seed = (seed * 1_103_515_245 + 12_345) % 2_147_483_648;
            let string = seed % 6;
            let fret = (seed / 6) % 25;
            set.toggle(&table, string, fret);

            let coords: HashSet<(usize, usize)> =
                set.iter().map(|p| (p.string, p.fret)).collect();
            assert_eq!(coords.len(), set.len());
        }
    }

    #[test]
    fn test_clear() {
        let table = table();
        let mut set = SelectionSet::new();
        assert_eq!(set.clear(), 0);
        set.toggle(&table, 0, 0);
        set.toggle(&table, 1, 1);
        assert_eq!(set.clear(), 2);
        assert!(set.is_empty());
    }

    #[test]
    fn test_retain_on_keeps_snapshots() {
        let table = table();
        let mut set = SelectionSet::new();
        set.toggle(&table, 0, 3);
        set.toggle(&table, 5, 20);
        set.toggle(&table, 2, 12);

        let bass = PitchTable::build(&crate::models::TuningPreset::Bass.tuning(), 4, 12).unwrap();
        let dropped = set.retain_on(&bass);
        assert_eq!(dropped, 1);
        assert_eq!(
            set.positions(),
            &[Position::new(0, 3, Pitch::G), Position::new(2, 12, Pitch::D)]
        );
    }

    #[test]
    fn test_display_label() {
        let position = Position::new(1, 3, Pitch::C);
        assert_eq!(position.to_string(), "[2 : 3] C");
    }
}
