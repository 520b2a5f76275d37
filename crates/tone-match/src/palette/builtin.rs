//! Built-in reference tones and palettes.
//!
//! Eight skin tones, darkest first. Matching order is this order, so it is
//! also the tie-break order.

use super::tone_set::{ReferenceTone, TonePalette, ToneSet};
use crate::color::{HexColor, Srgb};

/// Reference tone names and sRGB values, in matching order.
pub const BUILTIN_TONES: [(&str, [u8; 3]); 8] = [
    ("toffee", [123, 70, 56]),
    ("dark brown", [161, 100, 68]),
    ("medium", [178, 113, 71]),
    ("exotic", [205, 142, 99]),
    ("wheatish", [222, 156, 108]),
    ("normal", [241, 183, 143]),
    ("light neutral", [253, 211, 162]),
    ("fair", [254, 218, 184]),
];

struct BuiltinPalette {
    tone: &'static str,
    suitable: &'static [u32],
    avoid: &'static [u32],
}

const BUILTIN_PALETTES: [BuiltinPalette; 8] = [
    BuiltinPalette {
        tone: "toffee",
        suitable: &[
            0x50C878, 0x4169E1, 0x800020, 0xFFDB58, 0x40E0D0, 0x800080, 0xCC5500, 0x808000,
            0xFF7F50, 0x008080, 0xFF66CC, 0x36454F, 0xFFDAB9, 0x000080, 0xFFFFF0,
        ],
        avoid: &[0xFFFF33, 0xFF6EC7, 0xD3D3D3, 0xF5F5DC, 0xAEC6CF, 0x77DD77, 0xE6E6FA],
    },
    BuiltinPalette {
        tone: "dark brown",
        suitable: &[
            0x228B22, 0x0047AB, 0x8B0000, 0xFFD700, 0x7FFFD4, 0xDDA0DD, 0x800000, 0xC3B091,
            0xFA8072, 0xFF00FF, 0x000080, 0xFFFDD0, 0xB7410E, 0x87CEEB, 0xF7E7CE,
        ],
        avoid: &[0x39FF14, 0xFFFF00, 0xFFD1DC, 0xFFDAB9, 0xD3D3D3, 0x98FB98, 0xC0C0C0],
    },
    BuiltinPalette {
        tone: "medium",
        suitable: &[
            0xFFBF00, 0x0000FF, 0xDC143C, 0xFF8C00, 0x00CED1, 0x9370DB, 0x8B4513, 0x808000,
            0xFF4500, 0x008B8B, 0xFF69B4, 0x483C32, 0xFAEBD7, 0x000080, 0xF5DEB3,
        ],
        avoid: &[0xFFFFE0, 0xFF1493, 0xFFB6C1, 0xF5F5DC, 0xE0FFFF, 0x00FF7F, 0xFFFAFA],
    },
    BuiltinPalette {
        tone: "exotic",
        suitable: &[
            0xFFD700, 0x4682B4, 0xB22222, 0xFF4500, 0x5F9EA0, 0x9370DB, 0xA0522D, 0x8A2BE2,
            0xFF6347, 0x2E8B57, 0xC71585, 0xD2691E, 0xFFF5EE, 0x000080, 0xFFDEAD,
        ],
        avoid: &[0xFFFF00, 0xFF69B4, 0xFFC0CB, 0xF5F5DC, 0xAFEEEE, 0x66CDAA, 0xFFF0F5],
    },
    BuiltinPalette {
        tone: "wheatish",
        suitable: &[
            0xFFA500, 0x00008B, 0xB22222, 0xFF8C00, 0x4682B4, 0x9370DB, 0x8B4513, 0x6B8E23,
            0xFF6347, 0x2E8B57, 0xFF1493, 0x696969, 0xFAEBD7, 0x000080, 0xF4A460,
        ],
        avoid: &[0xFFFF00, 0xFF69B4, 0xFFB6C1, 0xF5F5DC, 0x00CED1, 0x98FB98, 0xF0E68C],
    },
    BuiltinPalette {
        tone: "normal",
        suitable: &[
            0xFFD700, 0x0000CD, 0xFF4500, 0xFF6347, 0x5F9EA0, 0x9370DB, 0x8B4513, 0x6B8E23,
            0xFF1493, 0x2E8B57, 0xFF00FF, 0x4B0082, 0xFFF5EE, 0x000080, 0xFFA07A,
        ],
        avoid: &[0xFFFF00, 0xFF69B4, 0xFFB6C1, 0xF5F5DC, 0xAFEEEE, 0x66CDAA, 0xFFF0F5],
    },
    BuiltinPalette {
        tone: "light neutral",
        suitable: &[
            0xFF4500, 0x1E90FF, 0xDC143C, 0xFFA500, 0x5F9EA0, 0x9370DB, 0x8B4513, 0x556B2F,
            0xFF6347, 0x2E8B57, 0xFF1493, 0x483D8B, 0xFAEBD7, 0x000080, 0xF5F5DC,
        ],
        avoid: &[0xFFFF00, 0xFF69B4, 0xFFC0CB, 0xF5F5DC, 0x00CED1, 0x98FB98, 0xF0E68C],
    },
    BuiltinPalette {
        tone: "fair",
        suitable: &[
            0xFFA500, 0x0000FF, 0xDC143C, 0xFF4500, 0x4682B4, 0x9370DB, 0x8B4513, 0x6B8E23,
            0xFF1493, 0x2E8B57, 0xFF00FF, 0x696969, 0xFFF5EE, 0x000080, 0xFFE4C4,
        ],
        avoid: &[0xFFFF00, 0xFF69B4, 0xFFC0CB, 0xF5F5DC, 0xAFEEEE, 0x66CDAA, 0xFFF0F5],
    },
];

fn hex_list(packed: &[u32]) -> Vec<HexColor> {
    packed.iter().copied().map(HexColor::from_u32).collect()
}

impl ToneSet {
    /// The eight built-in reference tones with their curated palettes.
    pub fn builtin() -> Self {
        let tones = BUILTIN_TONES
            .iter()
            .map(|(name, rgb)| ReferenceTone::new(*name, Srgb::from_bytes(*rgb)))
            .collect();

        // BUILTIN_PALETTES is declared in BUILTIN_TONES order
        let palettes = BUILTIN_PALETTES
            .iter()
            .map(|p| TonePalette::new(p.tone, hex_list(p.suitable), hex_list(p.avoid)))
            .collect();

        Self::from_aligned(tones, palettes)
    }
}
