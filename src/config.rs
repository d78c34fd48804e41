//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, DEFAULT_FRETS};
use crate::error::ConfigError;
use crate::models::{Fretboard, PitchTable, Tuning};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!(
                "invalid theme mode '{other}' (expected auto, dark or light)"
            )),
        }
    }
}

/// Instrument shape: tuning and fret count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentConfig {
    /// Open-string pitch names, lowest string first
    pub tuning: Vec<String>,
    /// Explicit string count. Defaults to the tuning length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strings: Option<usize>,
    /// Number of frets (fret 0 is the open string and is not counted)
    #[serde(default = "default_frets")]
    pub frets: usize,
}

const fn default_frets() -> usize {
    DEFAULT_FRETS
}

impl Default for InstrumentConfig {
    fn default() -> Self {
        Self {
            tuning: Tuning::standard().names(),
            strings: None,
            frets: DEFAULT_FRETS,
        }
    }
}

impl InstrumentConfig {
    /// Parses the tuning names.
    pub fn tuning(&self) -> Result<Tuning, ConfigError> {
        Tuning::from_names(&self.tuning)
    }

    /// String count: the explicit value if set, otherwise the tuning length.
    #[must_use]
    pub fn string_count(&self) -> usize {
        self.strings.unwrap_or(self.tuning.len())
    }

    /// Builds the pitch table described by this section.
    pub fn build_table(&self) -> Result<PitchTable, ConfigError> {
        PitchTable::build(&self.tuning()?, self.string_count(), self.frets)
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Show note names on the grid at startup
    #[serde(default = "default_show_notes")]
    pub show_notes: bool,
    /// Open the help overlay on startup
    #[serde(default)]
    pub show_help_on_startup: bool,
}

const fn default_show_notes() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            show_notes: default_show_notes(),
            show_help_on_startup: false,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Fretview/config.toml`
/// - macOS: `~/Library/Application Support/Fretview/config.toml`
/// - Windows: `%APPDATA%\Fretview\config.toml`
///
/// `FRETVIEW_CONFIG_DIR` overrides the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Instrument settings
    #[serde(default)]
    pub instrument: InstrumentConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Uses `FRETVIEW_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `Fretview`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    ///
    /// The file is parsed but not validated, so command-line overrides can
    /// replace a bad instrument before [`Config::validate`] runs.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!(path = %config_path.display(), "saved configuration");
        Ok(())
    }

    /// Validates configuration values by building the pitch table.
    pub fn validate(&self) -> Result<()> {
        self.instrument
            .build_table()
            .context("Invalid instrument configuration")?;
        Ok(())
    }

    /// Builds a fretboard from the instrument and UI sections.
    pub fn build_fretboard(&self) -> Result<Fretboard, ConfigError> {
        let mut fretboard = Fretboard::from_table(self.instrument.build_table()?);
        fretboard.set_notes_visible(self.ui.show_notes);
        Ok(fretboard)
    }
}
