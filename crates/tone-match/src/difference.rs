//! Color difference formulas
//!
//! # References
//!
//! G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 color-difference formula:
//! Implementation notes, supplementary test data, and mathematical
//! observations", Color Research & Application 30(1), 2005.

use std::fmt;
use std::str::FromStr;

use crate::color::Lab;

/// 25^7, the chroma normalization constant shared by G and R_C
const POW25_7: f64 = 6_103_515_625.0;

/// Distance metric for tone matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// CIEDE2000 (kL = kC = kH = 1).
    ///
    /// Weights lightness, chroma and hue differences non-linearly and adds a
    /// hue-chroma rotation term. This is the metric tones are matched with.
    #[default]
    Ciede2000,

    /// CIE76: Euclidean distance in Lab.
    ///
    /// Not perceptually uniform; available for comparison only.
    Cie76,
}

impl DistanceMetric {
    /// Distance between two Lab colors under this metric.
    #[inline]
    pub fn distance(self, a: Lab, b: Lab) -> f32 {
        match self {
            DistanceMetric::Ciede2000 => delta_e_2000(a, b),
            DistanceMetric::Cie76 => delta_e_76(a, b),
        }
    }

    /// Lowercase identifier, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            DistanceMetric::Ciede2000 => "ciede2000",
            DistanceMetric::Cie76 => "cie76",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a metric name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetricError(pub String);

impl fmt::Display for UnknownMetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown distance metric '{}' (expected 'ciede2000' or 'cie76')",
            self.0
        )
    }
}

impl std::error::Error for UnknownMetricError {}

impl FromStr for DistanceMetric {
    type Err = UnknownMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ciede2000" | "de2000" => Ok(DistanceMetric::Ciede2000),
            "cie76" | "de76" => Ok(DistanceMetric::Cie76),
            other => Err(UnknownMetricError(other.to_string())),
        }
    }
}

/// CIE76 color difference: Euclidean distance in Lab.
#[inline]
pub fn delta_e_76(a: Lab, b: Lab) -> f32 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Hue angle in degrees in `0.0..360.0`; 0.0 when both components are zero.
#[inline]
fn hue_angle(b: f64, a_prime: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// CIEDE2000 color difference with unit parametric factors.
///
/// Symmetric in its arguments and exactly zero for identical inputs.
/// Computed in f64 internally; the trigonometric terms lose several
/// digits in f32 near the hue discontinuity.
///
/// ```
/// use tone_match::{delta_e_2000, Lab};
///
/// let a = Lab::new(50.0, 2.6772, -79.7751);
/// let b = Lab::new(50.0, 0.0, -82.7485);
/// assert!((delta_e_2000(a, b) - 2.0425).abs() < 1e-3);
/// ```
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f32 {
    let (l1, a1, b1) = (lab1.l as f64, lab1.a as f64, lab1.b as f64);
    let (l2, a2, b2) = (lab2.l as f64, lab2.a as f64, lab2.b as f64);

    // Step 1: adjusted a' and C', h'
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_bar7 = ((c1 + c2) / 2.0).powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let a1p = (1.0 + g) * a1;
    let a2p = (1.0 + g) * a2;
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let h1p = hue_angle(b1, a1p);
    let h2p = hue_angle(b2, a2p);

    // Step 2: differences
    let dl = l2 - l1;
    let dc = c2p - c1p;
    let chroma_product = c1p * c2p;

    let dhp = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2p - h1p;
        if diff > 180.0 {
            diff - 360.0
        } else if diff < -180.0 {
            diff + 360.0
        } else {
            diff
        }
    };
    let dh = 2.0 * chroma_product.sqrt() * (dhp / 2.0).to_radians().sin();

    // Step 3: weighting functions
    let l_bar = (l1 + l2) / 2.0;
    let c_bar_p = (c1p + c2p) / 2.0;

    let h_bar_p = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (h_bar_p - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_p).to_radians().cos()
        + 0.32 * (3.0 * h_bar_p + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_p - 63.0).to_radians().cos();

    let d_theta = 30.0 * (-((h_bar_p - 275.0) / 25.0).powi(2)).exp();
    let c_bar_p7 = c_bar_p.powi(7);
    let r_c = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();

    let l_offset = (l_bar - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_offset / (20.0 + l_offset).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_p;
    let s_h = 1.0 + 0.015 * c_bar_p * t;
    let r_t = -(2.0 * d_theta).to_radians().sin() * r_c;

    let l_term = dl / s_l;
    let c_term = dc / s_c;
    let h_term = dh / s_h;

    (l_term * l_term + c_term * c_term + h_term * h_term + r_t * c_term * h_term).sqrt() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Srgb;

    /// Sharma et al. publish four decimals
    const SHARMA_TOLERANCE: f32 = 1e-3;

    fn lab(l: f32, a: f32, b: f32) -> Lab {
        Lab::new(l, a, b)
    }

    #[test]
    fn test_sharma_reference_pairs() {
        let cases = [
            // (pair #, lab1, lab2, expected)
            (1, lab(50.0, 2.6772, -79.7751), lab(50.0, 0.0, -82.7485), 2.0425),
            (2, lab(50.0, 3.1571, -77.2803), lab(50.0, 0.0, -82.7485), 2.8615),
            (3, lab(50.0, 2.8361, -74.0200), lab(50.0, 0.0, -82.7485), 3.4412),
            (7, lab(50.0, 0.0, 0.0), lab(50.0, -1.0, 2.0), 2.3669),
            (17, lab(50.0, 2.5, 0.0), lab(73.0, 25.0, -18.0), 27.1492),
            (18, lab(50.0, 2.5, 0.0), lab(61.0, -5.0, 29.0), 22.8977),
            (25, lab(60.2574, -34.0099, 36.2677), lab(60.4626, -34.1751, 39.4387), 1.2644),
            (26, lab(63.0109, -31.0961, -5.8663), lab(62.8187, -29.7946, -4.0864), 1.2630),
            (33, lab(2.0776, 0.0795, -1.1350), lab(0.9033, -0.0636, -0.5514), 0.9082),
        ];

        for (pair, a, b, expected) in cases {
            let forward = delta_e_2000(a, b);
            let backward = delta_e_2000(b, a);
            assert!(
                (forward - expected).abs() < SHARMA_TOLERANCE,
                "pair {pair}: got {forward}, expected {expected}"
            );
            assert!(
                (forward - backward).abs() < 1e-6,
                "pair {pair} not symmetric: {forward} vs {backward}"
            );
        }
    }

    #[test]
    fn test_identical_colors_have_zero_distance() {
        let colors = [
            lab(0.0, 0.0, 0.0),
            lab(100.0, 0.0, 0.0),
            lab(36.2, 17.1, 13.9),
            lab(50.0, -60.0, 80.0),
        ];
        for c in colors {
            assert_eq!(delta_e_2000(c, c), 0.0, "{c:?}");
            assert_eq!(delta_e_76(c, c), 0.0, "{c:?}");
        }
    }

    #[test]
    fn test_cie76_is_euclidean() {
        let d = delta_e_76(lab(50.0, 0.0, 0.0), lab(53.0, 4.0, 0.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_metrics_disagree_on_saturated_colors() {
        // CIEDE2000 compresses chroma differences at high chroma; CIE76 does not
        let a = lab(50.0, 60.0, 0.0);
        let b = lab(50.0, 80.0, 0.0);
        let de76 = delta_e_76(a, b);
        let de00 = delta_e_2000(a, b);
        assert!((de76 - 20.0).abs() < 1e-4);
        assert!(de00 < de76 / 2.0, "de00={de00} de76={de76}");
    }

    #[test]
    fn test_matches_palette_crate() {
        use palette::color_difference::Ciede2000;
        use palette::{FromColor, Lab as PaletteLab, Srgb as PaletteSrgb};

        let pairs = [
            ([123u8, 70u8, 56u8], [161u8, 100u8, 68u8]),
            ([222, 156, 108], [241, 183, 143]),
            ([253, 211, 162], [254, 218, 184]),
            ([200, 30, 30], [30, 30, 200]),
        ];

        for (p, q) in pairs {
            let ours = delta_e_2000(Lab::from(Srgb::from_bytes(p)), Lab::from(Srgb::from_bytes(q)));

            let to_lab = |c: [u8; 3]| -> PaletteLab {
                PaletteLab::from_color(
                    PaletteSrgb::new(c[0], c[1], c[2])
                        .into_format::<f32>()
                        .into_linear(),
                )
            };
            let theirs = to_lab(p).difference(to_lab(q));

            assert!(
                (ours - theirs).abs() < 0.05,
                "{p:?} vs {q:?}: ours={ours}, palette={theirs}"
            );
        }
    }

    #[test]
    fn test_metric_dispatch_and_parsing() {
        let a = lab(50.0, 60.0, 0.0);
        let b = lab(50.0, 80.0, 0.0);
        assert_eq!(DistanceMetric::default(), DistanceMetric::Ciede2000);
        assert_eq!(DistanceMetric::Ciede2000.distance(a, b), delta_e_2000(a, b));
        assert_eq!(DistanceMetric::Cie76.distance(a, b), delta_e_76(a, b));

        assert_eq!("CIEDE2000".parse(), Ok(DistanceMetric::Ciede2000));
        assert_eq!(" cie76 ".parse(), Ok(DistanceMetric::Cie76));
        assert_eq!(
            "euclid".parse::<DistanceMetric>(),
            Err(UnknownMetricError("euclid".to_string()))
        );
        assert_eq!(DistanceMetric::Cie76.to_string(), "cie76");
    }
}
