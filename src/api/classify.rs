use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use tone_match::{ClassifyError, Srgb};

use crate::error::ApiError;
use crate::server::AppState;

/// Request body for single-pixel classification
#[derive(Debug, Deserialize, ToSchema)]
pub struct ClassifyRequest {
    /// Red, green and blue channel values in 0..=255
    pub rgb: Vec<i64>,
}

/// Classification result
#[derive(Debug, Serialize, ToSchema)]
pub struct ClassifyResponse {
    /// Nearest reference tone
    pub tone: String,
    /// Color difference to that tone
    pub distance: f32,
    /// The classified color as `#RRGGBB`
    pub color: String,
    /// Reference color of the tone as `#RRGGBB`
    pub reference: String,
}

/// Classify a pixel color
#[utoipa::path(
    post,
    path = "/api/classify",
    request_body = ClassifyRequest,
    responses(
        (status = 200, description = "Nearest reference tone", body = ClassifyResponse),
        (status = 400, description = "Malformed color"),
    ),
    tag = "Tones"
)]
pub async fn handle_classify(
    State(state): State<AppState>,
    request: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let Json(request) = request?;
    let pixel = Srgb::try_from_channels(&request.rgb).map_err(ClassifyError::from)?;
    let result = state.classifier.classify(pixel);

    Ok(Json(ClassifyResponse {
        tone: result.tone.name().to_string(),
        distance: result.distance,
        color: pixel.to_string(),
        reference: result.tone.srgb().to_string(),
    }))
}
