//! Shared CLI types: errors, exit codes and instrument overrides.

use clap::Args;
use thiserror::Error;

use crate::config::Config;
use crate::models::{Fretboard, Tuning, TuningPreset};

/// Process exit codes used by subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input: bad tuning, coordinates out of range, bad config
    Validation = 1,
    /// Filesystem or serialization failure
    Io = 2,
}

impl ExitCode {
    /// Numeric code for `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands, carrying its exit code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// Message printed to stderr
    pub message: String,
    /// Exit code for the process
    pub exit_code: ExitCode,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Validation,
        }
    }

    /// Filesystem or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::Io,
        }
    }
}

impl CliError {
    /// Maps a config load/save failure to an exit code.
    ///
    /// Filesystem failures anywhere in the chain are IO errors; parse and
    /// instrument errors are validation errors.
    pub fn from_config(action: &str, err: &anyhow::Error) -> Self {
        let message = format!("{action}: {err:#}");
        if err.chain().any(|cause| cause.is::<std::io::Error>()) {
            Self::io(message)
        } else {
            Self::validation(message)
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Instrument flags shared by the TUI and every subcommand.
///
/// Values given here override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct InstrumentArgs {
    /// Open-string pitches, lowest string first (e.g. "E,A,D,G,B,E")
    #[arg(long, value_name = "PITCHES", global = true, conflicts_with = "preset")]
    pub tuning: Option<String>,

    /// Named tuning preset (standard, drop-d, open-g, dadgad, half-step-down, bass, seven-string)
    #[arg(long, value_name = "NAME", global = true)]
    pub preset: Option<TuningPreset>,

    /// Number of strings (defaults to the tuning length)
    #[arg(long, value_name = "N", global = true)]
    pub strings: Option<usize>,

    /// Number of frets
    #[arg(long, value_name = "N", global = true)]
    pub frets: Option<usize>,
}

impl InstrumentArgs {
    /// Whether any override was given.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tuning.is_none()
            && self.preset.is_none()
            && self.strings.is_none()
            && self.frets.is_none()
    }

    /// Writes the overrides into `config`.
    pub fn apply(&self, config: &mut Config) -> CliResult<()> {
        if let Some(text) = &self.tuning {
            let tuning: Tuning = text
                .parse()
                .map_err(|e| CliError::validation(format!("Invalid --tuning: {e}")))?;
            config.instrument.tuning = tuning.names();
            // A new tuning resets a string count taken from the file
            config.instrument.strings = None;
        } else if let Some(preset) = self.preset {
            config.instrument.tuning = preset.tuning().names();
            config.instrument.strings = None;
        }

        if let Some(strings) = self.strings {
            config.instrument.strings = Some(strings);
        }
        if let Some(frets) = self.frets {
            config.instrument.frets = frets;
        }
        Ok(())
    }

    /// Loads the config file, applies the overrides and builds the fretboard.
    pub fn resolve(&self) -> CliResult<(Config, Fretboard)> {
        let mut config =
            Config::load().map_err(|e| CliError::from_config("Failed to load configuration", &e))?;
        self.apply(&mut config)?;
        let fretboard = config
            .build_fretboard()
            .map_err(|e| CliError::validation(format!("Invalid instrument: {e}")))?;
        Ok((config, fretboard))
    }
}
