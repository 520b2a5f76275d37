use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use utoipa::ToSchema;

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    /// Marketplace product id
    pub id: u64,
    pub name: String,
    /// Free-text colour description, e.g. "Navy Blue"
    pub colour: Option<String>,
    pub image_url: String,
    pub rating_count: Option<u64>,
    pub avg_rating: Option<f64>,
    pub price: Option<f64>,
    /// Attribute map from the catalog export (e.g. `color`, `type`)
    #[schema(value_type = Object)]
    pub attributes: ProductAttributes,
}

/// Key/value attributes attached to a product.
///
/// The export stores these either as a JSON object or as a Python dict
/// literal such as `{'color': 'Navy Blue', 'type': 'A-Line'}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProductAttributes(BTreeMap<String, String>);

fn dict_entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?:'([^']*)'|"([^"]*)")\s*:\s*(?:'([^']*)'|"([^"]*)"|([^,}]+))"#)
            .unwrap_or_else(|e| unreachable!("static regex is valid: {e}"))
    })
}

impl ProductAttributes {
    /// Parse the raw attribute text. Anything unparsable yields an empty map.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if !(text.starts_with('{') && text.ends_with('}')) {
            return Self::default();
        }

        if let Ok(map) = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(text) {
            return map
                .into_iter()
                .map(|(k, v)| {
                    let v = match v {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    };
                    (k, v)
                })
                .collect();
        }

        dict_entry_pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let key = caps.get(1).or_else(|| caps.get(2))?.as_str();
                let value = caps
                    .get(3)
                    .or_else(|| caps.get(4))
                    .or_else(|| caps.get(5))?
                    .as_str()
                    .trim();
                Some((key.to_string(), value.to_string()))
            })
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The `color` attribute
    pub fn color(&self) -> Option<&str> {
        self.get("color")
    }

    /// The `type` attribute (garment cut, e.g. "A-Line")
    pub fn kind(&self) -> Option<&str> {
        self.get("type")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProductAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
