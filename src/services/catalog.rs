//! Product catalog loaded from the marketplace CSV export.

use std::collections::HashMap;
use std::io::Read;

use crate::error::CatalogError;
use crate::models::{Product, ProductAttributes};

/// Column names in the catalog export
mod columns {
    pub const ID: &str = "p_id";
    pub const NAME: &str = "name";
    pub const COLOUR: &str = "colour";
    pub const IMAGE: &str = "img";
    pub const RATING_COUNT: &str = "ratingCount";
    pub const AVG_RATING: &str = "avg_rating";
    pub const PRICE: &str = "price";
    pub const ATTRIBUTES: &str = "p_attributes";
}

/// Read-only product catalog in file order
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<u64, usize>,
}

impl Catalog {
    /// Build a catalog from products already in memory.
    ///
    /// When two products share an id, lookups by id return the first.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        for (idx, product) in products.iter().enumerate() {
            by_id.entry(product.id).or_insert(idx);
        }
        Self { products, by_id }
    }

    /// Load the catalog CSV.
    ///
    /// `p_id`, `name`, `colour`, `ratingCount` and `avg_rating` columns are
    /// required; `img`, `price` and `p_attributes` are optional. Rows with an
    /// unreadable record or id are skipped. Complete rows whose
    /// `(p_id, name, img)` combination occurs more than once are all dropped,
    /// along with incomplete rows that share a complete row's combination.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = reader.headers()?.clone();
        let find = |name: &'static str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| find(name).ok_or(CatalogError::MissingColumn(name));

        let id_idx = require(columns::ID)?;
        let name_idx = require(columns::NAME)?;
        let colour_idx = require(columns::COLOUR)?;
        let count_idx = require(columns::RATING_COUNT)?;
        let rating_idx = require(columns::AVG_RATING)?;
        let image_idx = find(columns::IMAGE);
        let price_idx = find(columns::PRICE);
        let attrs_idx = find(columns::ATTRIBUTES);

        let mut products = Vec::new();
        for (row_no, record) in reader.records().enumerate() {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(row = row_no + 1, %e, "Skipping unreadable catalog row");
                    continue;
                }
            };
            let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("").trim();

            let Some(id) = parse_count(field(Some(id_idx))) else {
                tracing::warn!(
                    row = row_no + 1,
                    id = field(Some(id_idx)),
                    "Skipping catalog row with invalid id"
                );
                continue;
            };

            products.push(Product {
                id,
                name: field(Some(name_idx)).to_string(),
                colour: non_empty(field(Some(colour_idx))),
                image_url: field(image_idx).to_string(),
                rating_count: parse_count(field(Some(count_idx))),
                avg_rating: parse_number(field(Some(rating_idx))),
                price: parse_number(field(price_idx)),
                attributes: ProductAttributes::parse(field(attrs_idx)),
            });
        }

        let loaded = products.len();
        let products = drop_duplicate_rows(products);
        tracing::info!(
            products = products.len(),
            duplicates_dropped = loaded - products.len(),
            "Loaded product catalog"
        );

        Ok(Self::from_products(products))
    }

    pub fn from_csv_bytes(data: &[u8]) -> Result<Self, CatalogError> {
        Self::from_reader(data)
    }

    pub fn get(&self, id: u64) -> Option<&Product> {
        self.by_id.get(&id).map(|&idx| &self.products[idx])
    }

    /// All products in file order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products similar to `id`, in catalog order, excluding `id` itself.
    ///
    /// Similar means the same `color` and `type` attributes. A product with
    /// neither attribute is matched on its free-text colour instead
    /// (case-insensitive). Returns `None` for an unknown id.
    pub fn similar_to(&self, id: u64, limit: usize) -> Option<Vec<&Product>> {
        let &selected_idx = self.by_id.get(&id)?;
        let selected = &self.products[selected_idx];
        let color = selected.attributes.color();
        let kind = selected.attributes.kind();

        let others = self
            .products
            .iter()
            .enumerate()
            .filter(|&(idx, _)| idx != selected_idx)
            .map(|(_, product)| product);

        let similar: Vec<&Product> = if color.is_some() || kind.is_some() {
            others
                .filter(|p| p.attributes.color() == color && p.attributes.kind() == kind)
                .take(limit)
                .collect()
        } else if let Some(colour) = selected.colour.as_deref() {
            let colour = colour.to_lowercase();
            others
                .filter(|p| {
                    p.colour
                        .as_deref()
                        .is_some_and(|c| c.to_lowercase() == colour)
                })
                .take(limit)
                .collect()
        } else {
            Vec::new()
        };

        Some(similar)
    }
}

type RowKey = (u64, String, String);

fn row_key(p: &Product) -> RowKey {
    (p.id, p.name.clone(), p.image_url.clone())
}

/// A row can be ranked only with a colour, a rating count and an average rating.
fn is_complete(p: &Product) -> bool {
    p.colour.is_some() && p.rating_count.is_some() && p.avg_rating.is_some()
}

/// Drop rows whose `(id, name, image_url)` key repeats.
///
/// Only complete rows are counted. Complete rows sharing a key are all
/// dropped, an incomplete row is dropped when a complete row has its key,
/// and incomplete rows with a key of their own are kept.
fn drop_duplicate_rows(products: Vec<Product>) -> Vec<Product> {
    let mut counts: HashMap<RowKey, usize> = HashMap::new();
    for p in products.iter().filter(|p| is_complete(p)) {
        *counts.entry(row_key(p)).or_default() += 1;
    }

    products
        .into_iter()
        .filter(|p| {
            let count = counts.get(&row_key(p)).copied().unwrap_or(0);
            let keep = if is_complete(p) { count == 1 } else { count == 0 };
            if !keep {
                tracing::debug!(
                    id = p.id,
                    complete = is_complete(p),
                    "Dropping duplicated catalog row"
                );
            }
            keep
        })
        .collect()
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Counts are exported either as integers or as floats ("1234.0").
fn parse_count(s: &str) -> Option<u64> {
    if let Ok(v) = s.parse::<u64>() {
        return Some(v);
    }
    parse_number(s)
        .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= u64::MAX as f64)
        .map(|v| v as u64)
}
