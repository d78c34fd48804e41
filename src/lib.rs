//! Fretview library
//!
//! Core fretboard model (pitch table, tuning, selection), configuration,
//! terminal UI and CLI commands for the `fretview` binary.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod shortcuts;
pub mod tui;

pub use error::ConfigError;
pub use models::{Fretboard, Pitch, PitchTable, Position, SelectionSet, Tuning, TuningPreset};
