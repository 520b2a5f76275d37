//! 8-bit sRGB color type
//!
//! Pixels sampled from photos and reference tones are both stored in this
//! form. Conversion to any perceptual space goes through [`LinearRgb`].

use std::fmt;
use std::str::FromStr;

use super::hex::HexColor;
use crate::palette::ParseColorError;

/// A gamma-encoded sRGB color with 8-bit channels.
///
/// This is the only color type that can be built from untrusted input.
/// [`Srgb::try_from_channels`] rejects anything outside `0..=255` instead
/// of clamping it, so a malformed request never silently becomes a
/// plausible color.
///
/// [`LinearRgb`]: super::LinearRgb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Srgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Srgb {
    /// Create an Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use tone_match::Srgb;
    /// let toffee = Srgb::from_u8(123, 70, 56);
    /// assert_eq!(toffee.r, 123);
    /// ```
    #[inline]
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build a color from loosely typed channel values.
    ///
    /// Exactly three channels are required and each must lie in `0..=255`.
    ///
    /// # Errors
    ///
    /// - [`ParseColorError::ChannelCount`] if there are not exactly three values
    /// - [`ParseColorError::ChannelOutOfRange`] for the first value outside `0..=255`
    ///
    /// # Example
    /// ```
    /// use tone_match::{ParseColorError, Srgb};
    ///
    /// assert_eq!(Srgb::try_from_channels(&[254, 218, 184]), Ok(Srgb::from_u8(254, 218, 184)));
    /// assert_eq!(
    ///     Srgb::try_from_channels(&[254, 300, 184]),
    ///     Err(ParseColorError::ChannelOutOfRange { index: 1, value: 300 })
    /// );
    /// ```
    pub fn try_from_channels(channels: &[i64]) -> Result<Self, ParseColorError> {
        let [r, g, b] = channels else {
            return Err(ParseColorError::ChannelCount {
                found: channels.len(),
            });
        };

        let channel = |index: usize, value: i64| {
            u8::try_from(value).map_err(|_| ParseColorError::ChannelOutOfRange { index, value })
        };

        Ok(Self::from_u8(channel(0, *r)?, channel(1, *g)?, channel(2, *b)?))
    }
}

impl From<[u8; 3]> for Srgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<HexColor> for Srgb {
    fn from(hex: HexColor) -> Self {
        Self::from_bytes(hex.to_bytes())
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&HexColor::from(*self), f)
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// with surrounding whitespace trimmed.
    ///
    /// ```
    /// use tone_match::Srgb;
    ///
    /// let navy: Srgb = "#000080".parse().unwrap();
    /// assert_eq!(navy, Srgb::from_u8(0, 0, 128));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<HexColor>().map(Self::from)
    }
}
