use cog_tiler::raster::RasterSource;
use cog_tiler::server::{create_app, AppState};
use cog_tiler::tile::GeoBounds;
use std::env;
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <raster-file> [--bounds west,south,east,north] [--port N]",
            args[0]
        );
        eprintln!("  --bounds: geographic coverage of the dataset (default: whole world)");
        eprintln!("  --port: listen port (default: 8080)");
        std::process::exit(1);
    }

    let raster_path = &args[1];
    let bounds = match flag_value(&args, "--bounds") {
        Some(raw) => GeoBounds::parse(&raw)
            .ok_or_else(|| anyhow::anyhow!("invalid --bounds, expected west,south,east,north"))?,
        None => GeoBounds::WORLD,
    };
    let port: u16 = match flag_value(&args, "--port") {
        Some(raw) => raw.parse()?,
        None => 8080,
    };

    if !Path::new(raster_path).exists() {
        eprintln!("Error: raster file not found: {}", raster_path);
        std::process::exit(1);
    }

    log::info!("Starting tile server...");
    log::info!("Loading dataset from: {}", raster_path);

    let source = RasterSource::open(raster_path, bounds)?;
    log::info!(
        "Dataset loaded: {}x{} pixels, bounds {}",
        source.width(),
        source.height(),
        source.bounds()
    );

    let app = create_app(AppState {
        source: Arc::new(source),
    });

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    log::info!("Server listening on http://0.0.0.0:{}", port);
    log::info!(
        "Try: http://0.0.0.0:{}/tiles/0/0/0.png?colormap_name=viridis",
        port
    );

    axum::serve(listener, app).await?;

    Ok(())
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1).cloned())
}
