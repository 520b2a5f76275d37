//! Reference tones, their palettes and nearest-tone matching.

use std::collections::HashSet;

use super::error::PaletteError;
use crate::color::{HexColor, Lab, Srgb};
use crate::difference::DistanceMetric;

/// A named reference skin tone.
///
/// The Lab value is computed once at construction, so matching a pixel
/// against the set costs one conversion for the pixel and one distance
/// call per tone.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTone {
    name: String,
    srgb: Srgb,
    lab: Lab,
}

impl ReferenceTone {
    /// Create a reference tone from its name and sRGB color.
    pub fn new(name: impl Into<String>, srgb: Srgb) -> Self {
        Self {
            name: name.into(),
            srgb,
            lab: Lab::from(srgb),
        }
    }

    /// Tone name, e.g. `"light neutral"`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference color as sampled sRGB.
    #[inline]
    pub fn srgb(&self) -> Srgb {
        self.srgb
    }

    /// Reference color in Lab.
    #[inline]
    pub fn lab(&self) -> Lab {
        self.lab
    }
}

/// Curated clothing colors for one reference tone.
///
/// Order is significant: it is the order the colors are presented in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TonePalette {
    tone_name: String,
    suitable: Vec<HexColor>,
    avoid: Vec<HexColor>,
}

impl TonePalette {
    /// Create a palette from parsed colors.
    pub fn new(tone_name: impl Into<String>, suitable: Vec<HexColor>, avoid: Vec<HexColor>) -> Self {
        Self {
            tone_name: tone_name.into(),
            suitable,
            avoid,
        }
    }

    /// Create a palette from hex strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any string is not a valid hex color.
    ///
    /// # Example
    ///
    /// ```
    /// use tone_match::TonePalette;
    ///
    /// let palette = TonePalette::from_hex("fair", &["#ffa500", "#0000FF"], &["#FFFF00"]).unwrap();
    /// assert_eq!(palette.suitable()[0].to_string(), "#FFA500");
    /// ```
    pub fn from_hex<S: AsRef<str>>(
        tone_name: impl Into<String>,
        suitable: &[S],
        avoid: &[S],
    ) -> Result<Self, PaletteError> {
        let parse = |list: &[S]| -> Result<Vec<HexColor>, PaletteError> {
            list.iter()
                .map(|s| s.as_ref().parse::<HexColor>().map_err(PaletteError::from))
                .collect()
        };

        Ok(Self::new(tone_name, parse(suitable)?, parse(avoid)?))
    }

    /// Name of the tone this palette belongs to.
    #[inline]
    pub fn tone_name(&self) -> &str {
        &self.tone_name
    }

    /// Colors that suit the tone.
    #[inline]
    pub fn suitable(&self) -> &[HexColor] {
        &self.suitable
    }

    /// Colors to avoid for the tone.
    #[inline]
    pub fn avoid(&self) -> &[HexColor] {
        &self.avoid
    }
}

/// Ordered reference tones with one palette each.
///
/// Iteration order is insertion order, and nearest-tone matching resolves
/// ties in favor of the earlier tone. Every tone is guaranteed to have a
/// palette, so a tone returned by [`ToneSet::find_nearest`] always has one.
#[derive(Debug, Clone)]
pub struct ToneSet {
    tones: Vec<ReferenceTone>,
    // palettes[i] belongs to tones[i]
    palettes: Vec<TonePalette>,
}

impl ToneSet {
    /// Build a tone set, pairing each tone with its palette.
    ///
    /// Palettes may be given in any order; they are matched to tones by name.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyToneSet`] if `tones` is empty
    /// - [`PaletteError::DuplicateTone`] if two tones share a name
    /// - [`PaletteError::UnexpectedPalette`] if a palette names an unknown
    ///   tone or a tone has more than one palette
    /// - [`PaletteError::MissingPalette`] if a tone has no palette
    pub fn new(tones: Vec<ReferenceTone>, palettes: Vec<TonePalette>) -> Result<Self, PaletteError> {
        if tones.is_empty() {
            return Err(PaletteError::EmptyToneSet);
        }

        let mut seen = HashSet::new();
        for tone in &tones {
            if !seen.insert(tone.name()) {
                return Err(PaletteError::DuplicateTone {
                    name: tone.name().to_string(),
                });
            }
        }

        let mut slots: Vec<Option<TonePalette>> = vec![None; tones.len()];
        for palette in palettes {
            let slot = tones
                .iter()
                .position(|t| t.name() == palette.tone_name())
                .map(|idx| &mut slots[idx])
                .filter(|slot| slot.is_none());

            match slot {
                Some(slot) => *slot = Some(palette),
                None => {
                    return Err(PaletteError::UnexpectedPalette {
                        tone: palette.tone_name().to_string(),
                    })
                }
            }
        }

        let palettes = slots
            .into_iter()
            .zip(&tones)
            .map(|(slot, tone)| {
                slot.ok_or_else(|| PaletteError::MissingPalette {
                    tone: tone.name().to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tones, palettes })
    }

    /// Build from vectors already known to be aligned and valid.
    pub(super) fn from_aligned(tones: Vec<ReferenceTone>, palettes: Vec<TonePalette>) -> Self {
        debug_assert_eq!(tones.len(), palettes.len());
        Self { tones, palettes }
    }

    /// Number of reference tones.
    #[inline]
    pub fn len(&self) -> usize {
        self.tones.len()
    }

    /// Always `false`; empty sets are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    /// Reference tones in matching order.
    #[inline]
    pub fn tones(&self) -> &[ReferenceTone] {
        &self.tones
    }

    /// Reference tone at `idx`.
    #[inline]
    pub fn tone(&self, idx: usize) -> &ReferenceTone {
        &self.tones[idx]
    }

    /// Palette of the tone at `idx`.
    #[inline]
    pub fn palette_at(&self, idx: usize) -> &TonePalette {
        &self.palettes[idx]
    }

    /// Tones paired with their palettes, in matching order.
    pub fn iter(&self) -> impl Iterator<Item = (&ReferenceTone, &TonePalette)> {
        self.tones.iter().zip(&self.palettes)
    }

    /// Whether a tone with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Look up the palette for a tone name.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::TonePaletteNotFound`] for names outside the set.
    pub fn palette(&self, name: &str) -> Result<&TonePalette, PaletteError> {
        self.position(name)
            .map(|idx| &self.palettes[idx])
            .ok_or_else(|| PaletteError::TonePaletteNotFound {
                tone: name.to_string(),
            })
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.tones.iter().position(|t| t.name() == name)
    }

    /// Find the reference tone nearest to `color`.
    ///
    /// Returns `(index, distance)`. Ties keep the first tone in set order.
    ///
    /// # Example
    ///
    /// ```
    /// use tone_match::{DistanceMetric, Lab, Srgb, ToneSet};
    ///
    /// let tones = ToneSet::builtin();
    /// let (idx, dist) = tones.find_nearest(Lab::from(Srgb::from_u8(123, 70, 56)), DistanceMetric::Ciede2000);
    /// assert_eq!(tones.tone(idx).name(), "toffee");
    /// assert_eq!(dist, 0.0);
    /// ```
    pub fn find_nearest(&self, color: Lab, metric: DistanceMetric) -> (usize, f32) {
        // Linear scan - the set holds a handful of tones
        let mut best_idx = 0;
        let mut best_dist = f32::MAX;

        for (i, tone) in self.tones.iter().enumerate() {
            let dist = metric.distance(color, tone.lab());
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }
}
