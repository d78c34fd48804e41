//! Pitch names and the fixed 12-step cycle they live on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of pitches in the cycle.
pub const PITCH_COUNT: usize = 12;

/// One of the 12 pitch names, ordered starting from E.
///
/// The ordering matters: the pitch `k` frets above an open string is
/// `SEQUENCE[(index(open) + k) % 12]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Pitch {
    /// E
    E,
    /// F
    F,
    /// F#
    FSharp,
    /// G
    G,
    /// G#
    GSharp,
    /// A
    A,
    /// A#
    ASharp,
    /// B
    B,
    /// C
    C,
    /// C#
    CSharp,
    /// D
    D,
    /// D#
    DSharp,
}

impl Pitch {
    /// The full cycle in order, starting at E.
    pub const SEQUENCE: [Self; PITCH_COUNT] = [
        Self::E,
        Self::F,
        Self::FSharp,
        Self::G,
        Self::GSharp,
        Self::A,
        Self::ASharp,
        Self::B,
        Self::C,
        Self::CSharp,
        Self::D,
        Self::DSharp,
    ];

    /// Position of this pitch within [`Pitch::SEQUENCE`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Pitch at a given index, wrapping around the cycle.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::SEQUENCE[index % PITCH_COUNT]
    }

    /// Pitch `semitones` steps above this one.
    #[must_use]
    pub const fn offset(self, semitones: usize) -> Self {
        Self::from_index(self.index() + semitones)
    }

    /// Display name (`"E"`, `"F#"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::E => "E",
            Self::F => "F",
            Self::FSharp => "F#",
            Self::G => "G",
            Self::GSharp => "G#",
            Self::A => "A",
            Self::ASharp => "A#",
            Self::B => "B",
            Self::C => "C",
            Self::CSharp => "C#",
            Self::D => "D",
            Self::DSharp => "D#",
        }
    }

    /// Parses one of the 12 canonical names. Surrounding whitespace is ignored.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::SEQUENCE.into_iter().find(|pitch| pitch.name() == name)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized pitch name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized pitch name '{0}'")]
pub struct ParsePitchError(pub String);

impl FromStr for Pitch {
    type Err = ParsePitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParsePitchError(s.to_string()))
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> Self {
        pitch.name().to_string()
    }
}

impl TryFrom<String> for Pitch {
    type Error = ParsePitchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
