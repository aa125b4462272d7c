use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::colormap::{self, ColorMapQuery};
use crate::raster::{colorize, encode_png};
use crate::tile::Tile;

use super::error::AppError;
use super::AppState;

/// Handle a tile request.
/// Path: /tiles/:z/:x/:y.png
pub async fn handle_tile_request(
    State(state): State<AppState>,
    Path((z, x, y_png)): Path<(u32, u32, String)>,
    Query(params): Query<ColorMapQuery>,
) -> Result<impl IntoResponse, AppError> {
    let y = y_png
        .strip_suffix(".png")
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(|| AppError::InvalidTile(format!("{}/{}/{}", z, x, y_png)))?;

    let tile = Tile::new(x, y, z);
    if !tile.is_valid() {
        return Err(AppError::InvalidTile(tile.to_string()));
    }

    let colormap = params.resolve()?;

    log::info!("rendering tile {}", tile);

    let values = state
        .source
        .extract_tile(&tile)
        .ok_or(AppError::TileOutsideBounds(tile))?;
    let image = colorize(&values, colormap.as_ref());
    let png = encode_png(&image)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

/// List the registered colormap names.
pub async fn list_colormaps() -> Json<serde_json::Value> {
    Json(json!({ "colormaps": colormap::names() }))
}

/// Dataset metadata.
#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    pub width: u32,
    pub height: u32,
    /// `[west, south, east, north]` in WGS84 degrees.
    pub bounds: [f64; 4],
}

pub async fn dataset_info(State(state): State<AppState>) -> Json<DatasetInfo> {
    let bounds = state.source.bounds();
    Json(DatasetInfo {
        width: state.source.width(),
        height: state.source.height(),
        bounds: [bounds.west, bounds.south, bounds.east, bounds.north],
    })
}

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "ping": "pong" }))
}
