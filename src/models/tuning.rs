//! Instrument tunings and the built-in presets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Pitch;
use crate::error::ConfigError;

/// Open-string pitches, one per string. String 0 is the lowest string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuning(Vec<Pitch>);

impl Tuning {
    /// Standard six-string guitar tuning (E A D G B E).
    #[must_use]
    pub fn standard() -> Self {
        TuningPreset::Standard.tuning()
    }

    /// Parses a list of pitch names.
    ///
    /// Fails with [`ConfigError::UnknownPitch`] on the first entry that is not
    /// a recognized name, and with [`ConfigError::EmptyTuning`] if the list is
    /// empty.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        if names.is_empty() {
            return Err(ConfigError::EmptyTuning);
        }

        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Pitch::from_name(name.as_ref()).ok_or_else(|| ConfigError::UnknownPitch {
                    name: name.as_ref().to_string(),
                    string: i + 1,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Number of strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tuning has no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All open pitches, lowest string first.
    #[must_use]
    pub fn pitches(&self) -> &[Pitch] {
        &self.0
    }

    /// Pitch names as strings, for config files.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|p| p.name()).collect();
        f.write_str(&names.join(" "))
    }
}

/// Accepts names separated by commas and/or whitespace: `"E,A,D,G,B,E"` or
/// `"D A D G B E"`.
impl FromStr for Tuning {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        Self::from_names(&names)
    }
}

/// Named tunings the UI can cycle through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TuningPreset {
    /// E A D G B E
    #[default]
    Standard,
    /// D A D G B E
    DropD,
    /// D G D G B D
    OpenG,
    /// D A D G A D
    Dadgad,
    /// D# G# C# F# A# D#
    HalfStepDown,
    /// E A D G (four-string bass)
    Bass,
    /// B E A D G B E
    SevenString,
}

impl TuningPreset {
    /// Every preset, in cycling order.
    pub const ALL: [Self; 7] = [
        Self::Standard,
        Self::DropD,
        Self::OpenG,
        Self::Dadgad,
        Self::HalfStepDown,
        Self::Bass,
        Self::SevenString,
    ];

    /// Open-string pitches for this preset.
    #[must_use]
    pub fn tuning(self) -> Tuning {
        use Pitch::{ASharp, CSharp, DSharp, FSharp, GSharp, A, B, D, E, G};

        let pitches = match self {
            Self::Standard => vec![E, A, D, G, B, E],
            Self::DropD => vec![D, A, D, G, B, E],
            Self::OpenG => vec![D, G, D, G, B, D],
            Self::Dadgad => vec![D, A, D, G, A, D],
            Self::HalfStepDown => vec![DSharp, GSharp, CSharp, FSharp, ASharp, DSharp],
            Self::Bass => vec![E, A, D, G],
            Self::SevenString => vec![B, E, A, D, G, B, E],
        };
        Tuning(pitches)
    }

    /// Kebab-case identifier used on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::DropD => "drop-d",
            Self::OpenG => "open-g",
            Self::Dadgad => "dadgad",
            Self::HalfStepDown => "half-step-down",
            Self::Bass => "bass",
            Self::SevenString => "seven-string",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::DropD => "Drop D",
            Self::OpenG => "Open G",
            Self::Dadgad => "DADGAD",
            Self::HalfStepDown => "Half step down",
            Self::Bass => "Bass",
            Self::SevenString => "Seven string",
        }
    }

    /// The preset after this one, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Finds the preset whose pitches match a tuning exactly.
    #[must_use]
    pub fn matching(tuning: &Tuning) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.tuning() == *tuning)
    }
}

impl fmt::Display for TuningPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TuningPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.id() == needle)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|p| p.id()).collect();
                format!("unknown preset '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}
