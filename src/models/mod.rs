//! Data models for pitches, tunings, the pitch table and selections.
//!
//! This module contains the core state of the application. Models are
//! independent of the terminal UI and the CLI.

pub mod fretboard;
pub mod pitch;
pub mod pitch_table;
pub mod selection;
pub mod tuning;

// Re-export all model types
pub use fretboard::{Command, CommandOutcome, Fretboard};
pub use pitch::{ParsePitchError, Pitch, PITCH_COUNT};
pub use pitch_table::{PitchTable, MAX_FRETS};
pub use selection::{Position, SelectionSet, Toggled};
pub use tuning::{Tuning, TuningPreset};
