use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tone_match::ClassifyError;

use crate::services::analysis::AnalysisError;
use crate::services::image_sampler::SampleError;
use crate::services::ranker::RankError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidJson(#[from] JsonRejection),

    #[error("Invalid query: {0}")]
    InvalidQuery(#[from] QueryRejection),

    #[error("{0}")]
    InvalidColor(#[from] ClassifyError),

    #[error("Invalid image: {0}")]
    Image(#[from] SampleError),

    #[error("Tone not found: {0}")]
    ToneNotFound(String),

    #[error("Product not found: {0}")]
    ProductNotFound(u64),

    #[error("Ranking error: {0}")]
    Rank(#[from] RankError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AnalysisError> for ApiError {
    fn from(e: AnalysisError) -> Self {
        match e {
            AnalysisError::Sample(e) => ApiError::Image(e),
            // The analysis limit and tone both come from server state
            AnalysisError::Rank(e) => ApiError::Internal(format!("Ranking failed: {e}")),
        }
    }
}

/// Errors raised while loading the catalog or the color-name table.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidJson(rejection)
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                StatusCode::PAYLOAD_TOO_LARGE
            }
            ApiError::InvalidJson(_)
            | ApiError::InvalidQuery(_)
            | ApiError::InvalidColor(_)
            | ApiError::Image(_) => StatusCode::BAD_REQUEST,
            ApiError::ToneNotFound(_) | ApiError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Rank(RankError::InvalidLimit) => StatusCode::BAD_REQUEST,
            ApiError::Rank(RankError::TonePaletteNotFound { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
