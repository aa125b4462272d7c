//! Colormapped raster tile server.
//!
//! Serves Web-Mercator PNG tiles from a single-band raster dataset,
//! colorized per request through the `colormap_name` / `colormap` /
//! `colormap_type` query parameters. Runs standalone (`cog-tiler`) or
//! behind AWS Lambda (`lambda` binary).

pub mod colormap;
pub mod raster;
pub mod server;
pub mod tile;
