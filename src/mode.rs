use std::{fmt, str::FromStr};

/// Selects the mapping tables and whitespace highlighting of the font filter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Mode {
    /// Control characters and newlines become glyphs, and space runs that
    /// are easy to miss get highlighted.
    #[default]
    Regular,
    /// Everything `Regular` maps, plus every space and the bidi and format
    /// controls. No extra highlighting pass.
    Raw,
}

/// Error returned when a mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown font filter mode {input:?}")]
pub struct ParseModeError {
    input: String,
}

impl ParseModeError {
    /// The rejected mode name.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Mode {
    /// The lowercase name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Regular => "regular",
            Mode::Raw => "raw",
        }
    }

    /// Parses a mode name, falling back to [`Mode::Regular`] for anything
    /// other than `"raw"`.
    pub fn from_str_lossy(name: &str) -> Self {
        match name {
            "raw" => Mode::Raw,
            _ => Mode::Regular,
        }
    }

    /// Returns `true` for [`Mode::Raw`].
    pub fn is_raw(self) -> bool {
        self == Mode::Raw
    }
}

impl From<bool> for Mode {
    /// Maps an editor's "raw mode" flag to a mode.
    fn from(is_raw: bool) -> Self {
        if is_raw {
            Mode::Raw
        } else {
            Mode::Regular
        }
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Mode::Regular),
            "raw" => Ok(Mode::Raw),
            _ => Err(ParseModeError {
                input: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
