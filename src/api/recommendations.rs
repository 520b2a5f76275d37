use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::server::AppState;
use crate::services::RankedProduct;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecommendationsQuery {
    /// Reference tone name, e.g. "wheatish"
    pub tone: String,
    /// Maximum number of products (defaults to `top_products` from config)
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecommendationsResponse {
    pub tone: String,
    /// Color names the tone's palette resolved to
    pub matched_names: Vec<String>,
    pub products: Vec<RankedProduct>,
}

/// Recommend products for a tone
#[utoipa::path(
    get,
    path = "/api/recommendations",
    params(RecommendationsQuery),
    responses(
        (status = 200, description = "Ranked products", body = RecommendationsResponse),
        (status = 400, description = "Invalid query or limit"),
        (status = 404, description = "Unknown tone"),
    ),
    tag = "Products"
)]
pub async fn handle_recommendations(
    State(state): State<AppState>,
    query: Result<Query<RecommendationsQuery>, QueryRejection>,
) -> Result<Json<RecommendationsResponse>, ApiError> {
    let Query(query) = query?;
    if !state.classifier.tones().contains(&query.tone) {
        return Err(ApiError::ToneNotFound(query.tone));
    }

    let limit = query.limit.unwrap_or(state.config.top_products);
    let products = state
        .ranker
        .rank(&query.tone, state.catalog.products(), limit)?;
    let matched_names = state
        .ranker
        .palette_names(&query.tone)?
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(Json(RecommendationsResponse {
        tone: query.tone,
        matched_names,
        products,
    }))
}
