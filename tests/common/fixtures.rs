//! Test fixtures and constants.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Product ids from the embedded catalog
pub mod products {
    /// Navy Blue A-Line kurta; best toffee match
    pub const NAVY_KURTA: u64 = 17048614;
    /// Navy Blue A-Line dress; same color and cut as NAVY_KURTA
    pub const NAVY_DRESS: u64 = 15879430;
    /// Crimson lehenga; best fair match
    pub const CRIMSON_LEHENGA: u64 = 17355120;
    /// Grey sweatshirt without attributes
    pub const GREY_SWEATSHIRT: u64 = 16882301;
    /// Duplicated row pair in the catalog; both copies are dropped
    pub const DUPLICATED: u64 = 19000001;
}

/// Reference RGB values of the built-in tones
pub mod tones {
    pub const TOFFEE: [u8; 3] = [123, 70, 56];
    pub const WHEATISH: [u8; 3] = [222, 156, 108];
    pub const FAIR: [u8; 3] = [254, 218, 184];
}

pub const HAIR: [u8; 3] = [40, 30, 20];
pub const EYE: [u8; 3] = [70, 110, 160];

/// A 30x10 portrait: skin on the left third, hair in the middle, eye on the right
pub fn portrait(skin: [u8; 3]) -> RgbImage {
    RgbImage::from_fn(30, 10, |x, _| match x / 10 {
        0 => Rgb(skin),
        1 => Rgb(HAIR),
        _ => Rgb(EYE),
    })
}

/// Points hitting skin, hair and eye in [`portrait`]
pub fn portrait_points() -> serde_json::Value {
    serde_json::json!([[5, 5], [15.5, 2], [25, 9.9]])
}

/// Encode an image as base64 in the given format
pub fn encode_base64(image: &RgbImage, format: ImageFormat) -> String {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format).expect("Failed to encode image");
    STANDARD.encode(buf.into_inner())
}

/// JSON body for /api/analyze
pub fn analyze_body(image_b64: &str, points: serde_json::Value) -> String {
    serde_json::json!({ "image": image_b64, "points": points }).to_string()
}
