//! Decode uploaded images and read the clicked pixels.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::RgbImage;
use thiserror::Error;
use tone_match::Srgb;

/// A clicked position as `[x, y]` in image pixels
pub type Point = [f64; 2];

/// Number of points an analysis needs: skin, hair, eye
pub const FEATURE_POINTS: usize = 3;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("invalid base64 data: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("unsupported or corrupt image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("expected {expected} points, got {found}")]
    PointCount { expected: usize, found: usize },

    #[error("point {index} ({x}, {y}) is outside the {width}x{height} image")]
    PointOutOfBounds {
        index: usize,
        x: f64,
        y: f64,
        width: u32,
        height: u32,
    },
}

/// Pixel colors at the skin, hair and eye points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSamples {
    pub skin: Srgb,
    pub hair: Srgb,
    pub eye: Srgb,
}

/// Decode a base64 PNG or JPEG into 8-bit RGB.
///
/// A `data:<mime>;base64,` prefix is accepted. Alpha is dropped.
pub fn decode_base64_image(data: &str) -> Result<RgbImage, SampleError> {
    let data = data.trim();
    let payload = match data.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or(rest, |(_, payload)| payload),
        None => data,
    };

    let bytes = STANDARD.decode(payload)?;
    let image = image::load_from_memory(&bytes)?;
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        bytes = bytes.len(),
        "Decoded image"
    );
    Ok(image.to_rgb8())
}

/// Read the pixel under each point.
///
/// Coordinates are truncated to pixel indices.
pub fn sample(image: &RgbImage, points: &[Point]) -> Result<Vec<Srgb>, SampleError> {
    let (width, height) = image.dimensions();
    points
        .iter()
        .enumerate()
        .map(|(index, &[x, y])| {
            let out_of_bounds = SampleError::PointOutOfBounds {
                index,
                x,
                y,
                width,
                height,
            };
            if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
                return Err(out_of_bounds);
            }
            let (px, py) = (x.trunc(), y.trunc());
            if px >= f64::from(width) || py >= f64::from(height) {
                return Err(out_of_bounds);
            }
            Ok(Srgb::from(image.get_pixel(px as u32, py as u32).0))
        })
        .collect()
}

/// Sample the skin, hair and eye points, in that order.
pub fn sample_features(image: &RgbImage, points: &[Point]) -> Result<FeatureSamples, SampleError> {
    if points.len() != FEATURE_POINTS {
        return Err(SampleError::PointCount {
            expected: FEATURE_POINTS,
            found: points.len(),
        });
    }
    match *sample(image, points)?.as_slice() {
        [skin, hair, eye] => Ok(FeatureSamples { skin, hair, eye }),
        _ => Err(SampleError::PointCount {
            expected: FEATURE_POINTS,
            found: points.len(),
        }),
    }
}
