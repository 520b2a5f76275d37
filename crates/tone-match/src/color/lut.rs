//! Gamma lookup table access
//!
//! The table is generated at compile time by build.rs with one exact entry
//! per 8-bit channel value.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Decode one 8-bit sRGB channel to linear light.
#[inline]
pub fn srgb8_to_linear(channel: u8) -> f32 {
    SRGB8_TO_LINEAR[channel as usize]
}
