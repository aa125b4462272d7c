//! AWS Lambda entry point.
//!
//! Serves the same router as the local binary behind API Gateway or a
//! Lambda function URL. The dataset ships with the function image and is
//! configured through the environment:
//!
//! - `TILER_DATASET`: path to the raster file (required)
//! - `TILER_BOUNDS`: dataset coverage as `west,south,east,north` (optional)

use std::sync::Arc;

use cog_tiler::raster::RasterSource;
use cog_tiler::server::{create_app, AppState};
use cog_tiler::tile::GeoBounds;
use lambda_http::{run, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Quiet the adapter's own request/lifecycle loggers
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("lambda_http", log::LevelFilter::Error)
        .filter_module("lambda_runtime", log::LevelFilter::Error)
        .init();

    let path = std::env::var("TILER_DATASET").map_err(|_| Error::from("TILER_DATASET is not set"))?;
    let bounds = match std::env::var("TILER_BOUNDS") {
        Ok(raw) => GeoBounds::parse(&raw)
            .ok_or_else(|| Error::from("invalid TILER_BOUNDS, expected west,south,east,north"))?,
        Err(_) => GeoBounds::WORLD,
    };

    log::info!("Loading dataset from: {}", path);
    let source = RasterSource::open(&path, bounds)?;
    log::info!(
        "Dataset loaded: {}x{} pixels, bounds {}",
        source.width(),
        source.height(),
        source.bounds()
    );

    let app = create_app(AppState {
        source: Arc::new(source),
    });

    run(app).await
}
