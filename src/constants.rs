//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Fretview";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "Fretview";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "FRETVIEW_CONFIG_DIR";

/// Log file written while the TUI owns the terminal.
pub const LOG_FILE_NAME: &str = "fretview.log";

/// Fret count used when nothing else is configured.
pub const DEFAULT_FRETS: usize = 24;

/// Frets that carry an inlay marker on most guitars.
pub const FRET_MARKERS: [usize; 10] = [3, 5, 7, 9, 12, 15, 17, 19, 21, 24];
