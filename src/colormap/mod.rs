//! Colormap resolution for tile rendering.
//!
//! Tile endpoints take three query parameters: `colormap_name` (a
//! registered colormap), `colormap` (a JSON-encoded custom colormap), and
//! `colormap_type` (`explicit` or `linear`). [`ColorMapQuery::resolve`]
//! turns that triple into an index-to-RGBA mapping, or `None` when no
//! colormap was requested.

mod gradient;
mod registry;

pub use gradient::{dense_256, evaluate, ColorStop};
pub use registry::{get, names};

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Mapping from 8-bit pixel value to an RGBA color.
pub type ColorMap = BTreeMap<u8, [u8; 4]>;

#[derive(Debug, Error)]
pub enum ColorMapError {
    /// `colormap_name` did not match any registered colormap.
    #[error("unknown colormap '{name}', expected one of: {supported}")]
    UnknownName { name: String, supported: String },
    /// `colormap` was not a valid JSON colormap object.
    #[error("Could not parse the colormap value.")]
    Malformed,
}

/// How a JSON-supplied colormap is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMapType {
    /// Use the decoded entries as-is.
    #[default]
    Explicit,
    /// Treat the entries as gradient control points and densify to 256.
    Linear,
}

/// Colormap selection, as supplied in the query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorMapQuery {
    /// Name of a registered colormap.
    pub colormap_name: Option<String>,
    /// JSON-encoded custom colormap.
    pub colormap: Option<String>,
    #[serde(default)]
    pub colormap_type: ColorMapType,
}

impl ColorMapQuery {
    /// Resolve the query triple into a colormap.
    ///
    /// `colormap_name` wins over `colormap` when both are present. With
    /// neither present there is no colormap and the band renders as
    /// grayscale.
    pub fn resolve(&self) -> Result<Option<ColorMap>, ColorMapError> {
        if let Some(name) = &self.colormap_name {
            return registry::get(name).map(Some);
        }

        if let Some(raw) = &self.colormap {
            let cm = parse_colormap(raw)?;
            if self.colormap_type == ColorMapType::Linear {
                return Ok(Some(linearize(&cm)));
            }
            return Ok(Some(cm));
        }

        Ok(None)
    }
}

/// Decode a JSON colormap object: integer keys in 0-255 mapped to color
/// values accepted by [`parse_color`].
fn parse_colormap(raw: &str) -> Result<ColorMap, ColorMapError> {
    let entries: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(raw).map_err(|_| ColorMapError::Malformed)?;
    if entries.is_empty() {
        return Err(ColorMapError::Malformed);
    }

    let mut cm = ColorMap::new();
    for (key, value) in entries {
        let index: u8 = key.parse().map_err(|_| ColorMapError::Malformed)?;
        cm.insert(index, parse_color(&value)?);
    }
    Ok(cm)
}

/// Decode a single color value: `[r, g, b]` (alpha 255), `[r, g, b, a]`,
/// or a hex string (`#rgb`, `#rrggbb`, `#rrggbbaa`).
pub fn parse_color(value: &serde_json::Value) -> Result<[u8; 4], ColorMapError> {
    match value {
        serde_json::Value::Array(channels) => {
            if channels.len() != 3 && channels.len() != 4 {
                return Err(ColorMapError::Malformed);
            }
            let mut rgba = [0, 0, 0, 255];
            for (slot, channel) in rgba.iter_mut().zip(channels) {
                let n = channel.as_u64().ok_or(ColorMapError::Malformed)?;
                *slot = u8::try_from(n).map_err(|_| ColorMapError::Malformed)?;
            }
            Ok(rgba)
        }
        serde_json::Value::String(hex) => parse_hex(hex),
        _ => Err(ColorMapError::Malformed),
    }
}

fn parse_hex(raw: &str) -> Result<[u8; 4], ColorMapError> {
    let hex = raw.strip_prefix('#').ok_or(ColorMapError::Malformed)?;
    if !hex.is_ascii() {
        return Err(ColorMapError::Malformed);
    }

    let mut rgba = [0, 0, 0, 255];
    match hex.len() {
        3 => {
            for (slot, c) in rgba.iter_mut().zip(hex.chars()) {
                let nibble = c.to_digit(16).ok_or(ColorMapError::Malformed)? as u8;
                *slot = nibble * 17;
            }
        }
        6 | 8 => {
            for (i, slot) in rgba.iter_mut().take(hex.len() / 2).enumerate() {
                *slot = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16)
                    .map_err(|_| ColorMapError::Malformed)?;
            }
        }
        _ => return Err(ColorMapError::Malformed),
    }
    Ok(rgba)
}

/// Reinterpret a sparse colormap as gradient control points: keys are
/// normalized over their range and the gradient is sampled at 256 evenly
/// spaced positions.
fn linearize(cm: &ColorMap) -> ColorMap {
    let (Some(&lo), Some(&hi)) = (cm.keys().next(), cm.keys().next_back()) else {
        return ColorMap::new();
    };
    let span = (hi - lo) as f64;

    let stops: Vec<ColorStop> = cm
        .iter()
        .map(|(&key, &color)| ColorStop {
            t: if span == 0.0 {
                0.0
            } else {
                (key - lo) as f64 / span
            },
            color,
        })
        .collect();

    dense_256(&stops)
}
