//! Registered colormaps.
//!
//! Each named colormap is defined as a small table of gradient control
//! stops and materialized dense (256 entries) on lookup.

use super::gradient::{dense_256, ColorStop};
use super::{ColorMap, ColorMapError};

const VIRIDIS: &[ColorStop] = &[
    ColorStop::new(0.00, 68, 1, 84, 255),
    ColorStop::new(0.25, 59, 82, 139, 255),
    ColorStop::new(0.50, 33, 145, 140, 255),
    ColorStop::new(0.75, 94, 201, 98, 255),
    ColorStop::new(1.00, 253, 231, 37, 255),
];

const MAGMA: &[ColorStop] = &[
    ColorStop::new(0.00, 0, 0, 4, 255),
    ColorStop::new(0.25, 81, 18, 124, 255),
    ColorStop::new(0.50, 183, 55, 121, 255),
    ColorStop::new(0.75, 252, 137, 97, 255),
    ColorStop::new(1.00, 252, 253, 191, 255),
];

const INFERNO: &[ColorStop] = &[
    ColorStop::new(0.00, 0, 0, 4, 255),
    ColorStop::new(0.25, 87, 16, 110, 255),
    ColorStop::new(0.50, 188, 55, 84, 255),
    ColorStop::new(0.75, 249, 142, 9, 255),
    ColorStop::new(1.00, 252, 255, 164, 255),
];

const PLASMA: &[ColorStop] = &[
    ColorStop::new(0.00, 13, 8, 135, 255),
    ColorStop::new(0.25, 126, 3, 168, 255),
    ColorStop::new(0.50, 204, 71, 120, 255),
    ColorStop::new(0.75, 248, 149, 64, 255),
    ColorStop::new(1.00, 240, 249, 33, 255),
];

const GRAY: &[ColorStop] = &[
    ColorStop::new(0.0, 0, 0, 0, 255),
    ColorStop::new(1.0, 255, 255, 255, 255),
];

/// Green -> Yellow -> Brown -> White (elevation)
const TERRAIN: &[ColorStop] = &[
    ColorStop::new(0.00, 34, 139, 34, 255),
    ColorStop::new(0.25, 144, 190, 60, 255),
    ColorStop::new(0.50, 220, 200, 80, 255),
    ColorStop::new(0.75, 180, 120, 60, 255),
    ColorStop::new(1.00, 255, 255, 255, 255),
];

/// Red -> White -> Blue (divergent data)
const RDBU: &[ColorStop] = &[
    ColorStop::new(0.00, 178, 24, 43, 255),
    ColorStop::new(0.25, 239, 138, 98, 255),
    ColorStop::new(0.50, 247, 247, 247, 255),
    ColorStop::new(0.75, 103, 169, 207, 255),
    ColorStop::new(1.00, 33, 102, 172, 255),
];

/// Registered colormaps, sorted by name.
const REGISTRY: &[(&str, &[ColorStop])] = &[
    ("gray", GRAY),
    ("inferno", INFERNO),
    ("magma", MAGMA),
    ("plasma", PLASMA),
    ("rdbu", RDBU),
    ("terrain", TERRAIN),
    ("viridis", VIRIDIS),
];

/// Registered colormap names, sorted.
pub fn names() -> Vec<&'static str> {
    REGISTRY.iter().map(|(name, _)| *name).collect()
}

/// Look up a registered colormap by name.
pub fn get(name: &str) -> Result<ColorMap, ColorMapError> {
    REGISTRY
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, stops)| dense_256(stops))
        .ok_or_else(|| ColorMapError::UnknownName {
            name: name.to_string(),
            supported: names().join(", "),
        })
}
