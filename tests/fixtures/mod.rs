//! Shared test fixtures for the integration tests.
#![allow(dead_code)] // Each test binary uses a different subset

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use fretview::models::{Fretboard, Tuning};

/// Path to the fretview binary
pub fn fretview_bin() -> String {
    std::env::var("CARGO_BIN_EXE_fretview")
        .unwrap_or_else(|_| "target/debug/fretview".to_string())
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(fretview_bin());
    cmd.env("FRETVIEW_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary in a fresh empty config directory.
pub fn run_isolated(args: &[&str]) -> (TempDir, Output) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = isolated_command(args, dir.path())
        .output()
        .expect("Failed to execute command");
    (dir, output)
}

/// Writes `config.toml` into the directory.
pub fn write_config(config_dir: &Path, content: &str) {
    fs::create_dir_all(config_dir).expect("Failed to create config dir");
    fs::write(config_dir.join("config.toml"), content).expect("Failed to write config");
}

/// Stdout as a String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// A 6-string, 24-fret fretboard in standard tuning.
pub fn standard_fretboard() -> Fretboard {
    Fretboard::new(&Tuning::standard(), 6, 24).expect("standard tuning builds")
}

/// Tiny deterministic generator so property-style tests need no extra crate.
pub struct Lcg(u64);

impl Lcg {
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_below(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) % bound as u64) as usize
    }
}
