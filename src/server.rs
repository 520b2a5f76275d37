//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tone_match::ToneClassifier;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::{AssetLoader, CATALOG_FILE, COLOR_NAMES_FILE};
use crate::models::AppConfig;
use crate::services::{AnalysisService, Catalog, ColorNameTable, PaletteRanker};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub classifier: Arc<ToneClassifier>,
    pub catalog: Arc<Catalog>,
    pub ranker: Arc<PaletteRanker>,
    pub analysis: Arc<AnalysisService>,
}

/// Create application state from an asset loader.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(&asset_loader);
    create_app_state_with_config(&asset_loader, config)
}

/// Create application state with an explicit configuration.
pub fn create_app_state_with_config(
    asset_loader: &AssetLoader,
    config: AppConfig,
) -> anyhow::Result<AppState> {
    let config = config.sanitized();
    let tones = config.tone_set().context("Invalid tone configuration")?;

    let names_data = asset_loader
        .read_data(COLOR_NAMES_FILE)
        .context("Failed to read color-name table")?;
    let names = ColorNameTable::from_csv_bytes(&names_data)
        .context("Failed to load color-name table")?;

    let catalog_data = asset_loader
        .read_data(CATALOG_FILE)
        .context("Failed to read product catalog")?;
    let catalog =
        Arc::new(Catalog::from_csv_bytes(&catalog_data).context("Failed to load product catalog")?);

    let classifier =
        Arc::new(ToneClassifier::new(tones.clone()).with_distance_metric(config.metric));
    let ranker = Arc::new(PaletteRanker::new(tones, names).with_weights(config.score));
    let analysis = Arc::new(AnalysisService::new(
        classifier.clone(),
        ranker.clone(),
        catalog.clone(),
        config.top_products,
    ));

    tracing::info!(
        tones = classifier.tones().len(),
        products = catalog.len(),
        metric = %classifier.metric(),
        "Application state ready"
    );

    Ok(AppState {
        config: Arc::new(config),
        classifier,
        catalog,
        ranker,
        analysis,
    })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_image_bytes;

    Router::new()
        .route("/api/analyze", post(api::handle_analyze))
        .route("/api/classify", post(api::handle_classify))
        .route("/api/tones", get(api::handle_tones))
        .route("/api/recommendations", get(api::handle_recommendations))
        .route("/api/products/:id", get(api::handle_product))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
