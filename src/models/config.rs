use crate::assets::AssetLoader;
use crate::services::ranker::ScoreWeights;
use serde::{Deserialize, Deserializer};
use tone_match::{DistanceMetric, PaletteError, ReferenceTone, Srgb, TonePalette, ToneSet};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Number of products returned by an analysis
    #[serde(default = "default_top_products")]
    pub top_products: usize,

    /// Number of similar items shown on a product page
    #[serde(default = "default_similar_items")]
    pub similar_items: usize,

    /// Request body limit in bytes (uploaded images travel base64 encoded)
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,

    /// Color difference metric used for tone classification
    #[serde(default, deserialize_with = "deserialize_metric")]
    pub metric: DistanceMetric,

    /// Product score weights
    #[serde(default)]
    pub score: ScoreWeights,

    /// Replacement reference tones (built-in set when absent)
    #[serde(default)]
    pub tones: Option<Vec<ToneConfig>>,
}

fn default_top_products() -> usize {
    10
}

fn default_similar_items() -> usize {
    5
}

fn default_max_image_bytes() -> usize {
    10 * 1024 * 1024
}

fn deserialize_metric<'de, D>(deserializer: D) -> Result<DistanceMetric, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

/// A reference tone with its palette, as written in config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct ToneConfig {
    pub name: String,
    pub rgb: [u8; 3],
    #[serde(default)]
    pub suitable: Vec<String>,
    #[serde(default)]
    pub avoid: Vec<String>,
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config = Self::sanitized(config);
                    tracing::info!(
                        top_products = config.top_products,
                        metric = %config.metric,
                        custom_tones = config.tones.as_ref().map_or(0, Vec::len),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Replace zero limits with their defaults.
    ///
    /// A zero `top_products` would make every analysis fail, so it is
    /// treated like any other unusable value: warn and use the default.
    pub fn sanitized(mut self) -> Self {
        let limits = [
            ("top_products", &mut self.top_products, default_top_products()),
            ("similar_items", &mut self.similar_items, default_similar_items()),
            (
                "max_image_bytes",
                &mut self.max_image_bytes,
                default_max_image_bytes(),
            ),
        ];
        for (key, value, default) in limits {
            if *value == 0 {
                tracing::warn!(key, default, "Config value must be at least 1, using default");
                *value = default;
            }
        }
        self
    }

    /// Build the tone set classified against
    pub fn tone_set(&self) -> Result<ToneSet, PaletteError> {
        let Some(ref tones) = self.tones else {
            return Ok(ToneSet::builtin());
        };

        let mut references = Vec::with_capacity(tones.len());
        let mut palettes = Vec::with_capacity(tones.len());
        for tone in tones {
            references.push(ReferenceTone::new(tone.name.clone(), Srgb::from(tone.rgb)));
            palettes.push(TonePalette::from_hex(&tone.name, &tone.suitable, &tone.avoid)?);
        }
        ToneSet::new(references, palettes)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            top_products: default_top_products(),
            similar_items: default_similar_items(),
            max_image_bytes: default_max_image_bytes(),
            metric: DistanceMetric::default(),
            score: ScoreWeights::default(),
            tones: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.top_products, 10);
        assert_eq!(config.similar_items, 5);
        assert_eq!(config.max_image_bytes, 10 * 1024 * 1024);
        assert_eq!(config.metric, DistanceMetric::Ciede2000);
        assert_eq!(config.score, ScoreWeights::default());
        assert!(config.tones.is_none());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.top_products, 10);
        assert_eq!(config.tone_set().unwrap().len(), 8);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r##"
top_products: 3
similar_items: 2
max_image_bytes: 1024
metric: cie76
score:
  rating_weight: 0.5
  popularity_weight: 0.5
tones:
  - name: deep
    rgb: [90, 60, 40]
    suitable: ["#000080", "#FFD700"]
    avoid: ["#FFFF00"]
  - name: pale
    rgb: [250, 225, 200]
    suitable: ["#DC143C"]
"##;

        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.top_products, 3);
        assert_eq!(config.similar_items, 2);
        assert_eq!(config.max_image_bytes, 1024);
        assert_eq!(config.metric, DistanceMetric::Cie76);
        assert_eq!(config.score.rating_weight, 0.5);

        let tones = config.tone_set().unwrap();
        assert_eq!(tones.len(), 2);
        assert_eq!(tones.tone(0).name(), "deep");
        let pale = tones.palette("pale").unwrap();
        assert_eq!(pale.suitable().len(), 1);
        assert!(pale.avoid().is_empty());
    }

    #[test]
    fn test_zero_limits_fall_back_to_defaults() {
        let yaml = "top_products: 0\nsimilar_items: 0\nmax_image_bytes: 0\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.top_products, 0);

        let config = config.sanitized();
        assert_eq!(config.top_products, 10);
        assert_eq!(config.similar_items, 5);
        assert_eq!(config.max_image_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_sanitized_keeps_valid_limits() {
        let config: AppConfig = serde_yaml::from_str("top_products: 3\n").unwrap();
        assert_eq!(config.sanitized().top_products, 3);
    }

    #[test]
    fn test_load_from_assets_sanitizes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "top_products: 0\nsimilar_items: 4\n").unwrap();

        let config = AppConfig::load_from_assets(&AssetLoader::new(None, Some(path)));
        assert_eq!(config.top_products, 10);
        assert_eq!(config.similar_items, 4);
    }

    #[test]
    fn test_unknown_metric_is_rejected() {
        let result: Result<AppConfig, _> = serde_yaml::from_str("metric: euclid\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_tone_hex_is_reported() {
        let yaml = r##"
tones:
  - name: deep
    rgb: [90, 60, 40]
    suitable: ["#00008"]
"##;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(config.tone_set(), Err(PaletteError::ParseColor(_))));
    }

    #[test]
    fn test_duplicate_tone_names_are_rejected() {
        let yaml = r#"
tones:
  - name: deep
    rgb: [90, 60, 40]
  - name: deep
    rgb: [91, 60, 40]
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            config.tone_set(),
            Err(PaletteError::DuplicateTone { .. })
        ));
    }

    #[test]
    fn test_embedded_config_parses() {
        let loader = AssetLoader::new(None, None);
        let content = loader.read_config_string().unwrap();
        let config: AppConfig = serde_yaml::from_str(&content).unwrap();
        assert_eq!(config.top_products, 10);
        assert_eq!(config.tone_set().unwrap().len(), 8);
    }
}
