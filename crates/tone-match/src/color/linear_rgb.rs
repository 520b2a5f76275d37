//! Linear RGB color type
//!
//! Linear RGB is proportional to physical light intensity. The XYZ matrix
//! that feeds Lab is only valid on linear values, never on encoded sRGB.

use super::lut::srgb8_to_linear;
use super::srgb::Srgb;

/// A color in linear RGB (sRGB primaries, D65 white).
///
/// Values are in the range 0.0..=1.0 when decoded from 8-bit sRGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Decode an 8-bit sRGB color with the IEC 61966-2-1 transfer curve.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb8_to_linear(srgb.r),
            g: srgb8_to_linear(srgb.g),
            b: srgb8_to_linear(srgb.b),
        }
    }
}
