//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult, InstrumentArgs};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the config file path
    Path,
    /// Set configuration values (instrument flags are saved too)
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Show note names on the grid at startup
    #[arg(long, value_name = "BOOL")]
    show_notes: Option<bool>,

    /// Open the help overlay on startup
    #[arg(long, value_name = "BOOL")]
    show_help_on_startup: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    instrument: InstrumentOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct InstrumentOutput {
    tuning: Vec<String>,
    strings: usize,
    frets: usize,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_notes: bool,
    show_help_on_startup: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, instrument: &InstrumentArgs) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                let path = config_path()?;
                println!("{path}");
                Ok(())
            }
            ConfigCommand::Set(args) => args.execute(instrument),
        }
    }
}

fn config_path() -> CliResult<String> {
    Config::config_file_path()
        .map(|p| p.display().to_string())
        .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}")))
}

fn load() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::from_config("Failed to load configuration", &e))
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load()?;
        config
            .validate()
            .map_err(|e| CliError::from_config("Failed to load configuration", &e))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config)?;
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, instrument: &InstrumentArgs) -> CliResult<()> {
        // At least one argument must be provided
        if self.theme.is_none()
            && self.show_notes.is_none()
            && self.show_help_on_startup.is_none()
            && instrument.is_empty()
        {
            return Err(CliError::validation(
                "At least one option must be specified: --theme, --show-notes, --show-help-on-startup, --tuning, --preset, --strings or --frets",
            ));
        }

        let mut config = load()?;
        instrument.apply(&mut config)?;

        if let Some(theme) = self.theme {
            config.ui.theme_mode = theme;
        }
        if let Some(show_notes) = self.show_notes {
            config.ui.show_notes = show_notes;
        }
        if let Some(show_help) = self.show_help_on_startup {
            config.ui.show_help_on_startup = show_help;
        }

        // Save validates first, so a bad instrument never reaches the disk
        config
            .save()
            .map_err(|e| CliError::from_config("Failed to save configuration", &e))?;

        println!("Configuration updated successfully.");
        Ok(())
    }
}

fn theme_name(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        path: config_path()?,
        instrument: InstrumentOutput {
            tuning: config.instrument.tuning.clone(),
            strings: config.instrument.string_count(),
            frets: config.instrument.frets,
        },
        ui: UiOutput {
            theme: theme_name(config.ui.theme_mode),
            show_notes: config.ui.show_notes,
            show_help_on_startup: config.ui.show_help_on_startup,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) -> CliResult<()> {
    println!("Fretview Configuration");
    println!("======================");
    println!("File: {}", config_path()?);
    println!();

    println!("Instrument:");
    println!("  Tuning: {}", config.instrument.tuning.join(" "));
    println!("  Strings: {}", config.instrument.string_count());
    println!("  Frets: {}", config.instrument.frets);
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", theme_name(config.ui.theme_mode));
    println!("  Show Notes: {}", config.ui.show_notes);
    println!("  Help On Startup: {}", config.ui.show_help_on_startup);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name() {
        assert_eq!(theme_name(ThemeMode::Auto), "auto");
        assert_eq!(theme_name(ThemeMode::Light), "light");
        assert_eq!(theme_name(ThemeMode::Dark), "dark");
    }
}
