use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::Product;
use crate::server::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetail {
    pub product: Product,
    pub similar_items: Vec<Product>,
}

/// Get a product and similar items
///
/// Similar items share the product's color and cut attributes, or its
/// colour text when the product has no attributes.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(
        ("id" = u64, Path, description = "Product id"),
    ),
    responses(
        (status = 200, description = "Product with similar items", body = ProductDetail),
        (status = 404, description = "Unknown product"),
    ),
    tag = "Products"
)]
pub async fn handle_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ProductDetail>, ApiError> {
    let product = state.catalog.get(id).ok_or(ApiError::ProductNotFound(id))?;
    let similar_items = state
        .catalog
        .similar_to(id, state.config.similar_items)
        .unwrap_or_default()
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ProductDetail {
        product: product.clone(),
        similar_items,
    }))
}
