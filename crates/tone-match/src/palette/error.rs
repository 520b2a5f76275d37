//! Error types for color parsing and tone-set validation

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing colors from strings or raw channel values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Hex string contains a sign or a non-ASCII character
    InvalidCharacter,
    /// Invalid hexadecimal digit encountered
    InvalidHex(ParseIntError),
    /// Wrong number of channel values (must be exactly 3)
    ChannelCount {
        /// Number of values supplied
        found: usize,
    },
    /// A channel value outside 0..=255
    ChannelOutOfRange {
        /// Channel position (0 = red, 1 = green, 2 = blue)
        index: usize,
        /// The rejected value
        value: i64,
    },
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidCharacter => {
                write!(f, "invalid character in hex color")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
            ParseColorError::ChannelCount { found } => {
                write!(f, "expected 3 color channels, got {}", found)
            }
            ParseColorError::ChannelOutOfRange { index, value } => {
                let channel = ["red", "green", "blue"].get(*index).copied().unwrap_or("?");
                write!(f, "{} channel value {} is outside 0..=255", channel, value)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for tone-set construction and palette lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No reference tones provided
    EmptyToneSet,
    /// Two reference tones share a name
    DuplicateTone {
        /// The repeated name
        name: String,
    },
    /// A reference tone has no palette
    MissingPalette {
        /// Tone without a palette
        tone: String,
    },
    /// A palette names a tone that is not in the set, or a tone has two palettes
    UnexpectedPalette {
        /// Tone name carried by the palette
        tone: String,
    },
    /// Lookup of a tone name that is not in the set
    TonePaletteNotFound {
        /// The requested name
        tone: String,
    },
    /// Invalid hex color string in a palette
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for PaletteError {
    fn from(err: ParseColorError) -> Self {
        PaletteError::ParseColor(err)
    }
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyToneSet => {
                write!(f, "tone set cannot be empty")
            }
            PaletteError::DuplicateTone { name } => {
                write!(f, "duplicate reference tone '{}'", name)
            }
            PaletteError::MissingPalette { tone } => {
                write!(f, "reference tone '{}' has no palette", tone)
            }
            PaletteError::UnexpectedPalette { tone } => {
                write!(f, "palette for '{}' does not match exactly one tone", tone)
            }
            PaletteError::TonePaletteNotFound { tone } => {
                write!(f, "no palette for tone '{}'", tone)
            }
            PaletteError::ParseColor(err) => {
                write!(f, "invalid color: {}", err)
            }
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}
