//! `fretview lookup`: pitch at one coordinate.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult, InstrumentArgs};
use crate::models::{Pitch, PitchTable};

/// Print the pitch at a string and fret
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// String index, 0 = lowest string
    #[arg(value_name = "STRING")]
    pub string: usize,

    /// Fret number, 0 = open string
    #[arg(value_name = "FRET")]
    pub fret: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of a lookup
#[derive(Serialize, Debug, PartialEq, Eq)]
struct LookupOutput {
    string: usize,
    fret: usize,
    note: Pitch,
}

impl LookupArgs {
    /// Execute lookup command
    pub fn execute(&self, instrument: &InstrumentArgs) -> CliResult<()> {
        let (_, fretboard) = instrument.resolve()?;
        let note = checked_lookup(fretboard.table(), self.string, self.fret)?;

        if self.json {
            let output = LookupOutput {
                string: self.string,
                fret: self.fret,
                note,
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize lookup to JSON: {e}")))?;
            println!("{json}");
        } else {
            println!("{note}");
        }
        Ok(())
    }
}

/// Bounds-checked lookup with a message naming the valid range.
pub fn checked_lookup(table: &PitchTable, string: usize, fret: usize) -> CliResult<Pitch> {
    table.get(string, fret).ok_or_else(|| {
        CliError::validation(format!(
            "Position ({string}, {fret}) is off the board: strings are 0..{}, frets are 0..={}",
            table.string_count(),
            table.fret_count()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::ExitCode;

    #[test]
    fn test_checked_lookup() {
        let table = PitchTable::default();
        assert_eq!(checked_lookup(&table, 1, 3).unwrap(), Pitch::C);

        let err = checked_lookup(&table, 6, 0).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::Validation);
        assert!(err.message.contains("strings are 0..6"));

        assert!(checked_lookup(&table, 0, 25).is_err());
    }

    #[test]
    fn test_json_shape() {
        let output = LookupOutput {
            string: 0,
            fret: 2,
            note: Pitch::FSharp,
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["note"], "F#");
        assert_eq!(json["fret"], 2);
    }
}
