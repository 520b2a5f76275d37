//! Reference tones and their color palettes
//!
//! A [`ToneSet`] owns the ordered reference skin tones plus exactly one
//! [`TonePalette`] per tone. It is built once at startup and never mutated.

mod builtin;
mod error;
mod tone_set;

pub use error::{PaletteError, ParseColorError};
pub use tone_set::{ReferenceTone, TonePalette, ToneSet};
