//! tone-match: perceptual skin-tone classification
//!
//! This library maps a sampled pixel color onto the closest entry of a small,
//! fixed set of named reference skin tones, and carries the curated color
//! palettes (colors that suit and colors to avoid) attached to each tone.
//!
//! # Quick Start
//!
//! ```
//! use tone_match::{Srgb, ToneClassifier, ToneSet};
//!
//! let classifier = ToneClassifier::new(ToneSet::builtin());
//! let result = classifier.classify(Srgb::from_u8(254, 218, 184));
//!
//! assert_eq!(result.tone.name(), "fair");
//! assert_eq!(result.distance, 0.0);
//! ```
//!
//! # Color Science
//!
//! Sampled pixels arrive as 8-bit sRGB. Classification runs in CIE L*a*b*:
//!
//! ```text
//! Srgb (8-bit, gamma encoded)
//!     |
//!     v
//! LinearRgb               (gamma decode via 256-entry LUT)
//!     |
//!     v
//! XYZ -> Lab              (D65 white, no chromatic adaptation)
//!     |
//!     v
//! CIEDE2000 against every reference tone, first minimum wins
//! ```
//!
//! Plain Euclidean distance in Lab (CIE76) over-weights differences in
//! saturated regions and ignores the hue rotation term in the blue region.
//! Skin tones cluster in a narrow orange hue band where lightness and chroma
//! differences dominate, which is exactly what the CIEDE2000 weighting
//! functions `S_L`, `S_C` and `S_H` were fitted for. [`DistanceMetric::Cie76`]
//! is kept only for comparison.

pub mod classify;
pub mod color;
pub mod difference;
pub mod palette;

pub use classify::{Classification, ClassifyError, ToneClassifier};
pub use color::{HexColor, Lab, LinearRgb, Srgb};
pub use difference::{delta_e_2000, delta_e_76, DistanceMetric};
pub use palette::{PaletteError, ParseColorError, ReferenceTone, TonePalette, ToneSet};
