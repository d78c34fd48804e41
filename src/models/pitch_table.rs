//! Precomputed pitch for every (string, fret) coordinate.

use serde::Serialize;

use super::{Pitch, Tuning};
use crate::error::ConfigError;

/// Largest fret count the grid will build.
pub const MAX_FRETS: usize = 48;

/// Immutable pitch grid built from a tuning and a fret count.
///
/// Rows are strings (`0..string_count`), columns are frets
/// (`0..=fret_count`). Every cell satisfies
/// `table[s][f] == tuning[s].offset(f)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PitchTable {
    tuning: Tuning,
    fret_count: usize,
    rows: Vec<Vec<Pitch>>,
}

impl PitchTable {
    /// Builds the table.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyTuning`] if `string_count` is zero
    /// - [`ConfigError::TuningLengthMismatch`] if `tuning.len() != string_count`
    /// - [`ConfigError::TooManyFrets`] if `fret_count > MAX_FRETS`
    pub fn build(
        tuning: &Tuning,
        string_count: usize,
        fret_count: usize,
    ) -> Result<Self, ConfigError> {
        if string_count == 0 || tuning.is_empty() {
            return Err(ConfigError::EmptyTuning);
        }
        if tuning.len() != string_count {
            return Err(ConfigError::TuningLengthMismatch {
                expected: string_count,
                actual: tuning.len(),
            });
        }
        if fret_count > MAX_FRETS {
            return Err(ConfigError::TooManyFrets {
                frets: fret_count,
                max: MAX_FRETS,
            });
        }

        let rows = tuning
            .pitches()
            .iter()
            .map(|open| (0..=fret_count).map(|fret| open.offset(fret)).collect())
            .collect();

        tracing::debug!(
            strings = string_count,
            frets = fret_count,
            tuning = %tuning,
            "built pitch table"
        );

        Ok(Self {
            tuning: tuning.clone(),
            fret_count,
            rows,
        })
    }

    /// Builds a table from raw pitch names, validating each one.
    pub fn from_names<S: AsRef<str>>(
        names: &[S],
        string_count: usize,
        fret_count: usize,
    ) -> Result<Self, ConfigError> {
        let tuning = Tuning::from_names(names)?;
        Self::build(&tuning, string_count, fret_count)
    }

    /// Pitch at a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `string >= string_count()` or `fret > fret_count()`.
    /// Callers only pass coordinates taken from the rendered grid.
    #[must_use]
    pub fn lookup(&self, string: usize, fret: usize) -> Pitch {
        self.rows[string][fret]
    }

    /// Pitch at a coordinate, or `None` when out of range.
    #[must_use]
    pub fn get(&self, string: usize, fret: usize) -> Option<Pitch> {
        self.rows.get(string)?.get(fret).copied()
    }

    /// Whether a coordinate lies inside the table.
    #[must_use]
    pub fn contains(&self, string: usize, fret: usize) -> bool {
        string < self.string_count() && fret <= self.fret_count
    }

    /// Number of strings (rows).
    #[must_use]
    pub fn string_count(&self) -> usize {
        self.rows.len()
    }

    /// Highest fret number. Each row has `fret_count() + 1` entries.
    #[must_use]
    pub fn fret_count(&self) -> usize {
        self.fret_count
    }

    /// Tuning the table was built from.
    #[must_use]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Rows, lowest string first.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pitch]> + ExactSizeIterator {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl Default for PitchTable {
    fn default() -> Self {
        let tuning = Tuning::standard();
        let strings = tuning.len();
        Self::build(&tuning, strings, crate::constants::DEFAULT_FRETS)
            .unwrap_or_else(|e| unreachable!("standard tuning is valid: {e}"))
    }
}
