//! Tile rendering: band values through a colormap to PNG bytes.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::colormap::ColorMap;
use crate::tile::TILE_SIZE;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Colorize a band window into an RGBA tile image.
///
/// With a colormap, band values map through it and values missing from a
/// sparse map render transparent. Without a colormap the band renders as
/// opaque grayscale. Masked pixels (outside the dataset) are transparent.
pub fn colorize(values: &[Option<u8>], colormap: Option<&ColorMap>) -> RgbaImage {
    let mut image = RgbaImage::new(TILE_SIZE, TILE_SIZE);
    for (pixel, value) in image.pixels_mut().zip(values) {
        *pixel = match (value, colormap) {
            (Some(v), Some(cm)) => cm.get(v).map(|&c| Rgba(c)).unwrap_or(TRANSPARENT),
            (Some(v), None) => Rgba([*v, *v, *v, 255]),
            (None, _) => TRANSPARENT,
        };
    }
    image
}

/// Encode an RGBA tile to PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buffer = Vec::new();
    image.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}
