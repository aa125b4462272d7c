//! Dataset access.
//!
//! The raster file is memory-mapped at startup and its first band decoded
//! to 8 bits, then kept in memory for the life of the process. All request
//! handling reads from the decoded band; nothing mutates it.

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use thiserror::Error;

use crate::tile::{GeoBounds, Tile, TILE_SIZE};

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to open dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode dataset: {0}")]
    Decode(#[from] image::ImageError),
}

/// A single-band raster with geographic bounds.
#[derive(Debug)]
pub struct RasterSource {
    band: Vec<u8>,
    width: u32,
    height: u32,
    bounds: GeoBounds,
}

impl RasterSource {
    /// Open a dataset file (GeoTIFF or PNG) covering the given bounds.
    ///
    /// Multi-band and high-bit-depth inputs are reduced to a single 8-bit
    /// band by luma conversion.
    pub fn open<P: AsRef<Path>>(path: P, bounds: GeoBounds) -> Result<Self, RasterError> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let band = image::load_from_memory(&mmap)?.into_luma8();
        let (width, height) = band.dimensions();
        Ok(Self::from_band(band.into_raw(), width, height, bounds))
    }

    /// Build a source from an in-memory band, row-major, north-up.
    pub fn from_band(band: Vec<u8>, width: u32, height: u32, bounds: GeoBounds) -> Self {
        RasterSource {
            band,
            width,
            height,
            bounds,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> GeoBounds {
        self.bounds
    }

    /// Band value at a geographic position, nearest neighbor.
    fn sample(&self, lon: f64, lat: f64) -> Option<u8> {
        if !self.bounds.contains(lon, lat) {
            return None;
        }
        let fx = (lon - self.bounds.west) / (self.bounds.east - self.bounds.west);
        let fy = (self.bounds.north - lat) / (self.bounds.north - self.bounds.south);
        let col = ((fx * self.width as f64) as u32).min(self.width - 1);
        let row = ((fy * self.height as f64) as u32).min(self.height - 1);
        Some(self.band[(row * self.width + col) as usize])
    }

    /// Extract the 256x256 band window for a tile.
    ///
    /// Returns `None` when the tile does not intersect the dataset bounds.
    /// Individual pixels outside the bounds come back as `None` and render
    /// transparent.
    pub fn extract_tile(&self, tile: &Tile) -> Option<Vec<Option<u8>>> {
        if !tile.bounds().intersects(&self.bounds) {
            return None;
        }

        let mut values = Vec::with_capacity((TILE_SIZE * TILE_SIZE) as usize);
        for py in 0..TILE_SIZE {
            for px in 0..TILE_SIZE {
                let (lon, lat) = tile.pixel_lonlat(px, py);
                values.push(self.sample(lon, lat));
            }
        }
        Some(values)
    }
}
