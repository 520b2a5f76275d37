//! Photo analysis: sample, classify the skin pixel, rank matching products.

use chrono::{DateTime, Utc};
use image::RgbImage;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tone_match::{HexColor, ToneClassifier};
use utoipa::ToSchema;

use crate::services::catalog::Catalog;
use crate::services::image_sampler::{self, Point, SampleError};
use crate::services::ranker::{PaletteRanker, RankError, RankedProduct};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Rank(#[from] RankError),
}

/// Result of analysing one photo
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalysisReport {
    /// Name of the nearest reference tone
    pub skin_tone: String,
    /// Sampled colors as `#RRGGBB`
    pub skin_color: String,
    pub hair_color: String,
    pub eye_color: String,
    /// Color difference between the skin sample and the reference tone
    pub distance: f32,
    pub suitable_colors: Vec<String>,
    pub colors_to_avoid: Vec<String>,
    pub top_products: Vec<RankedProduct>,
    pub analyzed_at: DateTime<Utc>,
}

/// Runs the whole analysis for one request
pub struct AnalysisService {
    classifier: Arc<ToneClassifier>,
    ranker: Arc<PaletteRanker>,
    catalog: Arc<Catalog>,
    top_products: usize,
}

impl AnalysisService {
    pub fn new(
        classifier: Arc<ToneClassifier>,
        ranker: Arc<PaletteRanker>,
        catalog: Arc<Catalog>,
        top_products: usize,
    ) -> Self {
        Self {
            classifier,
            ranker,
            catalog,
            top_products,
        }
    }

    /// Analyse a base64 encoded photo at the skin, hair and eye points.
    pub fn analyze(&self, image_b64: &str, points: &[Point]) -> Result<AnalysisReport, AnalysisError> {
        let image = image_sampler::decode_base64_image(image_b64)?;
        self.analyze_image(&image, points)
    }

    /// Analyse an already decoded photo.
    pub fn analyze_image(
        &self,
        image: &RgbImage,
        points: &[Point],
    ) -> Result<AnalysisReport, AnalysisError> {
        let samples = image_sampler::sample_features(image, points)?;
        let classification = self.classifier.classify(samples.skin);
        let tone = classification.tone.name();

        let top_products = self
            .ranker
            .rank(tone, self.catalog.products(), self.top_products)?;

        tracing::info!(
            skin = %samples.skin,
            tone,
            distance = classification.distance,
            products = top_products.len(),
            "Analysed photo"
        );

        Ok(AnalysisReport {
            skin_tone: tone.to_string(),
            skin_color: samples.skin.to_string(),
            hair_color: samples.hair.to_string(),
            eye_color: samples.eye.to_string(),
            distance: classification.distance,
            suitable_colors: hex_strings(classification.palette.suitable()),
            colors_to_avoid: hex_strings(classification.palette.avoid()),
            top_products,
            analyzed_at: Utc::now(),
        })
    }
}

fn hex_strings(colors: &[HexColor]) -> Vec<String> {
    colors.iter().map(HexColor::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, ProductAttributes};
    use crate::services::color_names::ColorNameTable;
    use image::Rgb;
    use tone_match::ToneSet;

    fn service(top_products: usize) -> AnalysisService {
        let tones = ToneSet::builtin();
        let names: ColorNameTable = [("#000080".parse::<HexColor>().unwrap(), "Navy")]
            .into_iter()
            .collect();
        let catalog = Catalog::from_products(
            (1..=4)
                .map(|id| Product {
                    id,
                    name: format!("Navy {id}"),
                    colour: Some("Navy Blue".to_string()),
                    image_url: String::new(),
                    rating_count: Some(id * 10),
                    avg_rating: Some(4.0),
                    price: None,
                    attributes: ProductAttributes::default(),
                })
                .collect(),
        );
        AnalysisService::new(
            Arc::new(ToneClassifier::new(tones.clone())),
            Arc::new(PaletteRanker::new(tones, names)),
            Arc::new(catalog),
            top_products,
        )
    }

    fn portrait() -> RgbImage {
        RgbImage::from_fn(3, 1, |x, _| match x {
            0 => Rgb([254, 218, 184]),
            1 => Rgb([40, 30, 20]),
            _ => Rgb([70, 110, 160]),
        })
    }

    #[test]
    fn test_analyze_image() {
        let report = service(2)
            .analyze_image(&portrait(), &[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]])
            .unwrap();

        assert_eq!(report.skin_tone, "fair");
        assert_eq!(report.skin_color, "#FEDAB8");
        assert_eq!(report.hair_color, "#281E14");
        assert_eq!(report.eye_color, "#466EA0");
        assert_eq!(report.distance, 0.0);
        assert_eq!(report.suitable_colors.len(), 15);
        assert_eq!(report.colors_to_avoid.len(), 7);
        assert!(report.suitable_colors.contains(&"#000080".to_string()));

        let ids: Vec<u64> = report.top_products.iter().map(|p| p.product.id).collect();
        assert_eq!(ids, vec![4, 3]);
    }

    #[test]
    fn test_analyze_rejects_bad_points() {
        let err = service(2)
            .analyze_image(&portrait(), &[[0.0, 0.0], [9.0, 0.0], [2.0, 0.0]])
            .unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Sample(SampleError::PointOutOfBounds { index: 1, .. })
        ));
    }

    #[test]
    fn test_analyze_rejects_bad_image() {
        let err = service(2).analyze("AAAA", &[]).unwrap_err();
        assert!(matches!(err, AnalysisError::Sample(SampleError::Decode(_))));
    }
}
