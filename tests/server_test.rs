use std::io::Cursor;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use cog_tiler::raster::RasterSource;
use cog_tiler::server::{create_app, AppState};
use cog_tiler::tile::GeoBounds;
use http_body_util::BodyExt;
use image::{GrayImage, ImageFormat, Luma};
use tempfile::NamedTempFile;
use tower::ServiceExt;

/// Build an app over a synthetic 64x64 horizontal-gradient dataset.
fn test_app(bounds: GeoBounds) -> Router {
    // Initialize logging
    let _ = env_logger::builder().is_test(true).try_init();

    let mut band = GrayImage::new(64, 64);
    for (x, _y, pixel) in band.enumerate_pixels_mut() {
        *pixel = Luma([(x * 4) as u8]);
    }

    let mut encoded = Vec::new();
    band.write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .expect("failed to encode test dataset");

    let file = NamedTempFile::new().expect("failed to create temp file");
    std::fs::write(file.path(), &encoded).expect("failed to write test dataset");

    let source = RasterSource::open(file.path(), bounds).expect("failed to open test dataset");
    create_app(AppState {
        source: Arc::new(source),
    })
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_tile_renders_png() {
    let app = test_app(GeoBounds::WORLD);
    let response = get(app, "/tiles/0/0/0.png?colormap_name=viridis").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..8], b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn test_tile_renders_without_colormap() {
    let app = test_app(GeoBounds::WORLD);
    let response = get(app, "/tiles/1/0/1.png").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_explicit_colormap_query() {
    let app = test_app(GeoBounds::WORLD);
    // {"0":[255,0,0,255],"255":[0,0,255,255]} url-encoded
    let uri = "/tiles/0/0/0.png?colormap=%7B%220%22%3A%5B255%2C0%2C0%2C255%5D%2C%22255%22%3A%5B0%2C0%2C255%2C255%5D%7D&colormap_type=linear";
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_malformed_colormap_is_client_error() {
    let app = test_app(GeoBounds::WORLD);
    let response = get(app, "/tiles/0/0/0.png?colormap=not%20json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Could not parse the colormap value.");
}

#[tokio::test]
async fn test_unknown_colormap_name_is_client_error() {
    let app = test_app(GeoBounds::WORLD);
    let response = get(app, "/tiles/0/0/0.png?colormap_name=sepia").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("sepia"));
    assert!(detail.contains("viridis"));
}

#[tokio::test]
async fn test_tile_outside_dataset_is_not_found() {
    let app = test_app(GeoBounds::new(0.0, 0.0, 10.0, 10.0));
    // Zoom 4, far west of the dataset coverage
    let response = get(app, "/tiles/4/1/1.png").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("outside dataset bounds"));
}

#[tokio::test]
async fn test_invalid_tile_coordinates_are_rejected() {
    let app = test_app(GeoBounds::WORLD);
    // x=9 does not exist at zoom 2
    let response = get(app, "/tiles/2/9/1.png").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tile_without_png_suffix_is_rejected() {
    let app = test_app(GeoBounds::WORLD);
    let response = get(app, "/tiles/0/0/0.jpg").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_colormap_listing() {
    let app = test_app(GeoBounds::WORLD);
    let response = get(app, "/colormaps").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let names: Vec<&str> = body["colormaps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n.as_str().unwrap())
        .collect();
    assert!(names.contains(&"viridis"));
    assert!(names.contains(&"gray"));
}

#[tokio::test]
async fn test_dataset_info() {
    let app = test_app(GeoBounds::new(-10.0, -10.0, 10.0, 10.0));
    let response = get(app, "/info").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["width"], 64);
    assert_eq!(body["height"], 64);
    assert_eq!(body["bounds"][0], -10.0);
    assert_eq!(body["bounds"][3], 10.0);
}

#[tokio::test]
async fn test_healthz() {
    let app = test_app(GeoBounds::WORLD);
    let response = get(app, "/healthz").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ping"], "pong");
}
