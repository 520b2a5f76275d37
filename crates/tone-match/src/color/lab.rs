//! CIE L*a*b* color space
//!
//! Lab is the reference space for the CIE color-difference formulas.
//! Conversion uses the D65 reference white, the native white of sRGB, so
//! no chromatic adaptation step is involved.
//!
//! # References
//!
//! CIE 15:2004, Colorimetry, 3rd edition, section 8.2.1.

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;

/// D65 reference white in XYZ, normalized to Y = 1.
const D65_WHITE: [f32; 3] = [0.950_47, 1.0, 1.088_83];

/// CIE constant epsilon = (6/29)^3
const EPSILON: f32 = 216.0 / 24_389.0;

/// CIE constant kappa = (29/3)^3
const KAPPA: f32 = 24_389.0 / 27.0;

/// A color in CIE L*a*b* space.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (diffuse white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 to 100.0
    pub l: f32,
    /// Green-red axis, roughly -128.0 to 127.0 for sRGB colors
    pub a: f32,
    /// Blue-yellow axis, roughly -128.0 to 127.0 for sRGB colors
    pub b: f32,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Chroma, the distance from the neutral axis: `sqrt(a^2 + b^2)`.
    #[inline]
    pub fn chroma(self) -> f32 {
        self.a.hypot(self.b)
    }

    /// Hue angle in degrees, in `0.0..360.0`.
    ///
    /// Achromatic colors report 0.0.
    #[inline]
    pub fn hue_degrees(self) -> f32 {
        let h = self.b.atan2(self.a).to_degrees();
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    }
}

/// Lab companding function f(t)
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

impl From<LinearRgb> for Lab {
    /// Convert linear sRGB to Lab through XYZ (IEC 61966-2-1 matrix).
    fn from(rgb: LinearRgb) -> Self {
        let x = 0.412_456_4 * rgb.r + 0.357_576_1 * rgb.g + 0.180_437_5 * rgb.b;
        let y = 0.212_672_9 * rgb.r + 0.715_152_2 * rgb.g + 0.072_175_0 * rgb.b;
        let z = 0.019_333_9 * rgb.r + 0.119_192_0 * rgb.g + 0.950_304_1 * rgb.b;

        let fx = lab_f(x / D65_WHITE[0]);
        let fy = lab_f(y / D65_WHITE[1]);
        let fz = lab_f(z / D65_WHITE[2]);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Srgb> for Lab {
    fn from(srgb: Srgb) -> Self {
        Lab::from(LinearRgb::from(srgb))
    }
}
