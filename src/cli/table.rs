//! `fretview table`: print the pitch table.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult, InstrumentArgs};
use crate::constants::FRET_MARKERS;
use crate::models::PitchTable;

/// Print the pitch table for the configured instrument
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON shape of the table
#[derive(Serialize, Debug)]
struct TableOutput<'a> {
    tuning: Vec<String>,
    strings: usize,
    frets: usize,
    /// `rows[string][fret]`, lowest string first
    rows: Vec<Vec<&'a str>>,
}

impl TableArgs {
    /// Execute table command
    pub fn execute(&self, instrument: &InstrumentArgs) -> CliResult<()> {
        let (_, fretboard) = instrument.resolve()?;
        let table = fretboard.table();

        if self.json {
            let output = TableOutput {
                tuning: table.tuning().names(),
                strings: table.string_count(),
                frets: table.fret_count(),
                rows: table
                    .rows()
                    .map(|row| row.iter().map(|pitch| pitch.name()).collect())
                    .collect(),
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize table to JSON: {e}")))?;
            println!("{json}");
        } else {
            print!("{}", render_text(table));
        }

        Ok(())
    }
}

/// Text grid: marker header, then one line per string, highest string first.
#[must_use]
pub fn render_text(table: &PitchTable) -> String {
    let mut out = String::from("     ");
    for fret in 0..=table.fret_count() {
        if fret == 0 || FRET_MARKERS.contains(&fret) {
            out.push_str(&format!("{fret:<4}"));
        } else {
            out.push_str("    ");
        }
    }
    out = out.trim_end().to_string();
    out.push('\n');

    for (string, row) in table.rows().enumerate().rev() {
        let mut line = format!("{:>2} | ", string + 1);
        for pitch in row {
            line.push_str(&format!("{:<4}", pitch.name()));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tuning;

    #[test]
    fn test_render_text_small_table() {
        let tuning = Tuning::from_names(&["E", "A"]).unwrap();
        let table = PitchTable::build(&tuning, 2, 3).unwrap();
        let text = render_text(&table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "     0           3");
        assert_eq!(lines[1], " 2 | A   A#  B   C");
        assert_eq!(lines[2], " 1 | E   F   F#  G");
    }
}
