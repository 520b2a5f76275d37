//! Palette-matched product ranking.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tone_match::ToneSet;
use utoipa::ToSchema;

use crate::models::Product;
use crate::services::color_names::ColorNameTable;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("Limit must be at least 1")]
    InvalidLimit,

    #[error("No palette for tone '{tone}'")]
    TonePaletteNotFound { tone: String },
}

/// Weights of the two score terms.
///
/// `score = rating_weight * avg_rating + popularity_weight * rating_count / max_rating_count`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub rating_weight: f64,
    pub popularity_weight: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            rating_weight: 0.7,
            popularity_weight: 0.3,
        }
    }
}

/// A product with its weighted score
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RankedProduct {
    #[serde(flatten)]
    pub product: Product,
    pub weighted_score: f64,
}

/// Ranks catalog products against the suitable colors of a tone.
#[derive(Debug, Clone)]
pub struct PaletteRanker {
    tones: ToneSet,
    names: ColorNameTable,
    weights: ScoreWeights,
}

impl PaletteRanker {
    pub fn new(tones: ToneSet, names: ColorNameTable) -> Self {
        Self {
            tones,
            names,
            weights: ScoreWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Color names the tone's suitable palette resolves to
    pub fn palette_names(&self, tone_name: &str) -> Result<Vec<&str>, RankError> {
        let palette = self
            .tones
            .palette(tone_name)
            .map_err(|_| RankError::TonePaletteNotFound {
                tone: tone_name.to_string(),
            })?;
        Ok(self.names.resolve(palette.suitable()))
    }

    /// Top `top_n` products whose colour mentions one of the tone's palette
    /// names, best score first.
    ///
    /// Products without a colour, rating or rating count are skipped. Equal
    /// scores keep catalog order.
    pub fn rank(
        &self,
        tone_name: &str,
        catalog: &[Product],
        top_n: usize,
    ) -> Result<Vec<RankedProduct>, RankError> {
        if top_n == 0 {
            return Err(RankError::InvalidLimit);
        }

        let names: Vec<String> = self
            .palette_names(tone_name)?
            .into_iter()
            .map(str::to_lowercase)
            .collect();
        if names.is_empty() {
            tracing::debug!(tone = tone_name, "Palette resolves to no color names");
            return Ok(Vec::new());
        }

        let mut matched = Vec::new();
        for product in catalog {
            let Some(colour) = product.colour.as_deref() else {
                tracing::warn!(id = product.id, "Skipping product without colour");
                continue;
            };
            let colour = colour.to_lowercase();
            if !names.iter().any(|name| colour.contains(name.as_str())) {
                continue;
            }
            let (Some(avg_rating), Some(rating_count)) = (product.avg_rating, product.rating_count)
            else {
                tracing::warn!(id = product.id, "Skipping product without rating");
                continue;
            };
            matched.push((product, avg_rating, rating_count));
        }

        let Some(max_count) = matched.iter().map(|&(_, _, count)| count).max() else {
            return Ok(Vec::new());
        };

        let mut ranked: Vec<RankedProduct> = matched
            .into_iter()
            .map(|(product, avg_rating, rating_count)| {
                let popularity = if max_count == 0 {
                    0.0
                } else {
                    rating_count as f64 / max_count as f64
                };
                RankedProduct {
                    product: product.clone(),
                    weighted_score: self.weights.rating_weight * avg_rating
                        + self.weights.popularity_weight * popularity,
                }
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));
        ranked.truncate(top_n);

        tracing::debug!(
            tone = tone_name,
            names = names.len(),
            returned = ranked.len(),
            "Ranked products"
        );
        Ok(ranked)
    }
}
