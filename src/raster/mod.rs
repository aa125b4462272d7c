//! Raster dataset access and tile rendering.

pub mod render;
pub mod source;

pub use render::{colorize, encode_png};
pub use source::{RasterError, RasterSource};
