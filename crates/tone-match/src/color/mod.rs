//! Color types and conversion utilities
//!
//! - **Srgb**: 8-bit gamma-encoded color, as sampled from an image.
//! - **HexColor**: canonical `#RRGGBB` key used for palette and name lookups.
//! - **LinearRgb**: linear light intensity, the input to XYZ.
//! - **Lab**: CIE L*a*b*, the space color differences are measured in.
//!
//! # Example
//!
//! ```
//! use tone_match::{Lab, Srgb};
//!
//! let pixel = Srgb::from_u8(178, 113, 71);
//! let lab = Lab::from(pixel);
//! assert!(lab.l > 50.0 && lab.l < 60.0);
//! ```

mod hex;
mod lab;
mod linear_rgb;
mod lut;
mod srgb;

pub use hex::HexColor;
pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use srgb::Srgb;
