pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::raster::RasterSource;
use handlers::{dataset_info, handle_tile_request, health, list_colormaps};

/// Shared application state: the dataset, loaded once at startup.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<RasterSource>,
}

/// Assemble the application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/tiles/:z/:x/:y", get(handle_tile_request))
        .route("/colormaps", get(list_colormaps))
        .route("/info", get(dataset_info))
        .route("/healthz", get(health))
        .with_state(state)
}
