use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::server::AppState;

/// A reference tone with its palette
#[derive(Debug, Serialize, ToSchema)]
pub struct ToneInfo {
    pub name: String,
    #[schema(value_type = Vec<u8>)]
    pub rgb: [u8; 3],
    /// Reference color as `#RRGGBB`
    pub hex: String,
    pub suitable: Vec<String>,
    pub avoid: Vec<String>,
}

/// List reference tones
///
/// Tones are returned in matching order, which is also the order used to
/// break ties between equally distant tones.
#[utoipa::path(
    get,
    path = "/api/tones",
    responses(
        (status = 200, description = "Reference tones with palettes", body = Vec<ToneInfo>),
    ),
    tag = "Tones"
)]
pub async fn handle_tones(State(state): State<AppState>) -> Json<Vec<ToneInfo>> {
    let tones = state
        .classifier
        .tones()
        .iter()
        .map(|(tone, palette)| ToneInfo {
            name: tone.name().to_string(),
            rgb: tone.srgb().to_bytes(),
            hex: tone.srgb().to_string(),
            suitable: palette.suitable().iter().map(ToString::to_string).collect(),
            avoid: palette.avoid().iter().map(ToString::to_string).collect(),
        })
        .collect();

    Json(tones)
}
