//! Error-to-status mapping for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::colormap::ColorMapError;
use crate::tile::Tile;

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad colormap parameters: unknown name or malformed JSON.
    #[error("{0}")]
    ColorMap(#[from] ColorMapError),
    /// Tile coordinates that do not exist at the requested zoom level.
    #[error("invalid tile coordinates {0}")]
    InvalidTile(String),
    /// Tile does not intersect the dataset.
    #[error("tile {0} is outside dataset bounds")]
    TileOutsideBounds(Tile),
    /// Rendering or encoding failure.
    #[error("failed to render tile: {0}")]
    Render(#[from] image::ImageError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::ColorMap(_) | AppError::InvalidTile(_) => StatusCode::BAD_REQUEST,
            AppError::TileOutsideBounds(_) => StatusCode::NOT_FOUND,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
