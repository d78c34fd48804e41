//! CLI command handlers for Fretview.
//!
//! Headless, scriptable access to the pitch table and the configuration.

pub mod common;
pub mod config;
pub mod lookup;
pub mod table;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode, InstrumentArgs};
pub use config::ConfigArgs;
pub use lookup::LookupArgs;
pub use table::TableArgs;
