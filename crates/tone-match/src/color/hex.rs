//! Canonical hex color keys
//!
//! Palette entries and the color-name table both refer to colors by hex
//! string. Those strings come from different sources with different casing
//! and prefixes, so every comparison goes through [`HexColor`], which always
//! renders as `#RRGGBB` uppercase.

use std::fmt;
use std::str::FromStr;

use super::srgb::Srgb;
use crate::palette::ParseColorError;

/// A 24-bit color used as a lookup key.
///
/// Two spellings of the same color (`#ff7f50`, `FF7F50`, `#FF7F50`) parse to
/// equal values and hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexColor(u32);

impl HexColor {
    /// Create from a packed `0xRRGGBB` value. Bits above 24 are discarded.
    ///
    /// ```
    /// use tone_match::HexColor;
    /// assert_eq!(HexColor::from_u32(0x000080).to_string(), "#000080");
    /// ```
    #[inline]
    pub const fn from_u32(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    /// Packed `0xRRGGBB` value.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Channel bytes [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }
}

impl From<Srgb> for HexColor {
    fn from(color: Srgb) -> Self {
        Self(((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        // from_str_radix accepts a leading '+', which is not a hex digit
        if !s.is_ascii() || s.starts_with('+') {
            return Err(ParseColorError::InvalidCharacter);
        }

        match s.len() {
            3 => {
                // Shorthand: each digit doubles (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Srgb::from_u8(r, g, b).into())
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Srgb::from_u8(r, g, b).into())
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spellings_normalize_to_one_key() {
        let a: HexColor = "#ff7f50".parse().unwrap();
        let b: HexColor = "FF7F50".parse().unwrap();
        let c: HexColor = "  #Ff7F50".parse().unwrap();

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.to_string(), "#FF7F50");
        assert_eq!(a, HexColor::from_u32(0xFF7F50));
    }

    #[test]
    fn test_shorthand_expands() {
        let color: HexColor = "#ABC".parse().unwrap();
        assert_eq!(color, HexColor::from_u32(0xAABBCC));
    }

    #[test]
    fn test_bytes_round_trip_through_srgb() {
        let hex = HexColor::from_u32(0x36454F);
        assert_eq!(hex.to_bytes(), [0x36, 0x45, 0x4F]);
        assert_eq!(HexColor::from(Srgb::from(hex)), hex);
    }

    #[test]
    fn test_from_u32_masks_high_bits() {
        assert_eq!(HexColor::from_u32(0xFF00_0080).to_u32(), 0x80);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "#GGGGGG".parse::<HexColor>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert_eq!(
            "#FFFF".parse::<HexColor>(),
            Err(ParseColorError::InvalidLength)
        );
        assert_eq!("".parse::<HexColor>(), Err(ParseColorError::InvalidLength));
        assert_eq!("#".parse::<HexColor>(), Err(ParseColorError::InvalidLength));
        assert_eq!(
            "#+FFFFF".parse::<HexColor>(),
            Err(ParseColorError::InvalidCharacter)
        );
        assert_eq!(
            "#ÄBCDE".parse::<HexColor>(),
            Err(ParseColorError::InvalidCharacter)
        );
    }
}
