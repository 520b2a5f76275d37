//! Nearest-tone classification of sampled pixels.

use std::fmt;

use crate::color::{Lab, Srgb};
use crate::difference::DistanceMetric;
use crate::palette::{ParseColorError, ReferenceTone, TonePalette, ToneSet};

/// Error returned for malformed pixel input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// The channel values do not describe an 8-bit RGB color
    InvalidColor(ParseColorError),
}

impl From<ParseColorError> for ClassifyError {
    fn from(err: ParseColorError) -> Self {
        ClassifyError::InvalidColor(err)
    }
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::InvalidColor(err) => write!(f, "invalid color: {}", err),
        }
    }
}

impl std::error::Error for ClassifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClassifyError::InvalidColor(err) => Some(err),
        }
    }
}

/// Outcome of classifying one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification<'a> {
    /// The nearest reference tone
    pub tone: &'a ReferenceTone,
    /// The palette attached to that tone
    pub palette: &'a TonePalette,
    /// Position of the tone in set order
    pub index: usize,
    /// Distance from the pixel to the tone under the classifier's metric
    pub distance: f32,
}

/// Maps pixel colors to the nearest reference tone.
///
/// Classification is a pure function of the pixel and the tone set: it
/// always returns exactly one tone, with ties going to the earlier tone.
///
/// # Example
///
/// ```
/// use tone_match::{Srgb, ToneClassifier, ToneSet};
///
/// let classifier = ToneClassifier::new(ToneSet::builtin());
/// let result = classifier.classify(Srgb::from_u8(160, 100, 70));
/// assert_eq!(result.tone.name(), "dark brown");
/// ```
#[derive(Debug, Clone)]
pub struct ToneClassifier {
    tones: ToneSet,
    metric: DistanceMetric,
}

impl ToneClassifier {
    /// Create a classifier using CIEDE2000.
    pub fn new(tones: ToneSet) -> Self {
        Self {
            tones,
            metric: DistanceMetric::default(),
        }
    }

    /// Override the distance metric.
    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// The tone set classified against.
    #[inline]
    pub fn tones(&self) -> &ToneSet {
        &self.tones
    }

    /// The configured distance metric.
    #[inline]
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Classify an 8-bit sRGB pixel.
    pub fn classify(&self, pixel: Srgb) -> Classification<'_> {
        let (index, distance) = self.tones.find_nearest(Lab::from(pixel), self.metric);
        Classification {
            tone: self.tones.tone(index),
            palette: self.tones.palette_at(index),
            index,
            distance,
        }
    }

    /// Classify loosely typed channel values.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::InvalidColor`] unless `channels` holds exactly
    /// three values in `0..=255`. Nothing is clamped.
    pub fn classify_channels(&self, channels: &[i64]) -> Result<Classification<'_>, ClassifyError> {
        let pixel = Srgb::try_from_channels(channels)?;
        Ok(self.classify(pixel))
    }
}
