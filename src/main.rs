//! Fretview - interactive terminal fretboard
//!
//! Shows the note at every string and fret of a stringed instrument and lets
//! you mark positions with the keyboard or mouse.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use fretview::cli::{CliError, ConfigArgs, InstrumentArgs, LookupArgs, TableArgs};
use fretview::constants::APP_NAME;
use fretview::logging::{self, LogTarget};
use fretview::tui;

/// Fretview - interactive terminal fretboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    instrument: InstrumentArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the pitch table
    Table(TableArgs),
    /// Print the pitch at a string and fret
    Lookup(LookupArgs),
    /// Show or change the configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(command) => {
            logging::init(LogTarget::Stderr, cli.verbose)?;
            if let Err(e) = run_command(command, &cli.instrument) {
                eprintln!("Error: {e}");
                std::process::exit(e.exit_code.code());
            }
            Ok(())
        }
        None => run_interactive(&cli.instrument, cli.verbose),
    }
}

fn run_command(command: &Command, instrument: &InstrumentArgs) -> Result<(), CliError> {
    match command {
        Command::Table(args) => args.execute(instrument),
        Command::Lookup(args) => args.execute(instrument),
        Command::Config(args) => args.execute(instrument),
    }
}

fn run_interactive(instrument: &InstrumentArgs, verbose: bool) -> Result<()> {
    // Resolve the instrument before touching the terminal so errors print normally
    let (config, fretboard) = instrument.resolve()?;

    let log_path = logging::init(LogTarget::File, verbose)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = ?log_path,
        "starting {APP_NAME}"
    );

    let mut app_state = tui::AppState::new(fretboard, config)?;

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut app_state, &mut terminal);
    tui::restore_terminal(terminal)?;

    result.context("Terminal UI failed")
}
