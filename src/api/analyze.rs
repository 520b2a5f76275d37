use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::server::AppState;
use crate::services::{AnalysisReport, Point};

/// Request body for photo analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Base64 encoded PNG or JPEG, optionally as a `data:` URL
    pub image: String,
    /// Skin, hair and eye positions as `[x, y]` pixel coordinates
    #[schema(value_type = Vec<Vec<f64>>)]
    pub points: Vec<Point>,
}

/// Analyse a photo
///
/// Samples the skin, hair and eye pixels, classifies the skin color against
/// the reference tones and returns the tone's palette with the best-rated
/// products in matching colors.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis result", body = AnalysisReport),
        (status = 400, description = "Invalid image or points"),
        (status = 413, description = "Image too large"),
    ),
    tag = "Analysis"
)]
pub async fn handle_analyze(
    State(state): State<AppState>,
    request: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let Json(request) = request?;
    let analysis = state.analysis.clone();

    // Decoding a full-size photo is CPU-bound
    let report = tokio::task::spawn_blocking(move || {
        analysis.analyze(&request.image, &request.points)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Analysis task failed: {e}")))??;

    Ok(Json(report))
}
