//! Error types for instrument configuration.
//!
//! Building a pitch table is the only fallible core operation. Everything
//! above it (config files, terminal setup, CLI) reports through `anyhow`.

use thiserror::Error;

/// Raised when a tuning or fret count cannot produce a pitch table.
///
/// A failed construction never leaves a partially built table behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The tuning has a different number of entries than the string count.
    #[error("tuning has {actual} entries but the instrument has {expected} strings")]
    TuningLengthMismatch {
        /// Requested string count
        expected: usize,
        /// Number of pitches in the tuning
        actual: usize,
    },

    /// A tuning entry is not one of the 12 recognized pitch names.
    #[error("unrecognized pitch name '{name}' for string {string}")]
    UnknownPitch {
        /// The offending text
        name: String,
        /// 1-based string number, as shown in the UI
        string: usize,
    },

    /// The tuning contains no strings.
    #[error("tuning must contain at least one string")]
    EmptyTuning,

    /// The fret count exceeds what the grid can display.
    #[error("{frets} frets requested, at most {max} are supported")]
    TooManyFrets {
        /// Requested fret count
        frets: usize,
        /// Maximum supported fret count
        max: usize,
    },
}
