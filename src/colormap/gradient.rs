//! Multi-stop gradient evaluation.

use super::ColorMap;

/// A gradient control point: position `t` in [0, 1] mapped to an RGBA color.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub t: f64,
    pub color: [u8; 4],
}

impl ColorStop {
    pub const fn new(t: f64, r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            t,
            color: [r, g, b, a],
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_color(c1: [u8; 4], c2: [u8; 4], t: f64) -> [u8; 4] {
    let mut out = [0u8; 4];
    for (slot, (&a, &b)) in out.iter_mut().zip(c1.iter().zip(c2.iter())) {
        *slot = lerp(a as f64, b as f64, t).round() as u8;
    }
    out
}

/// Evaluate a gradient at position `t`.
///
/// Stops must be sorted by `t`. Positions below the first stop and above
/// the last stop clamp to the end colors.
pub fn evaluate(stops: &[ColorStop], t: f64) -> [u8; 4] {
    if t <= stops[0].t {
        return stops[0].color;
    }
    if t >= stops[stops.len() - 1].t {
        return stops[stops.len() - 1].color;
    }
    for i in 1..stops.len() {
        if t <= stops[i].t {
            let ratio = (t - stops[i - 1].t) / (stops[i].t - stops[i - 1].t);
            return lerp_color(stops[i - 1].color, stops[i].color, ratio);
        }
    }
    stops[stops.len() - 1].color
}

/// Materialize a gradient as a dense 256-entry colormap, one entry per
/// 8-bit index, each channel quantized to u8.
pub fn dense_256(stops: &[ColorStop]) -> ColorMap {
    let mut out = ColorMap::new();
    for i in 0..=255u8 {
        let t = i as f64 / 255.0;
        out.insert(i, evaluate(stops, t));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_TO_BLUE: &[ColorStop] = &[
        ColorStop::new(0.0, 255, 0, 0, 255),
        ColorStop::new(1.0, 0, 0, 255, 255),
    ];

    #[test]
    fn endpoints() {
        assert_eq!(evaluate(RED_TO_BLUE, 0.0), [255, 0, 0, 255]);
        assert_eq!(evaluate(RED_TO_BLUE, 1.0), [0, 0, 255, 255]);
    }

    #[test]
    fn midpoint() {
        assert_eq!(evaluate(RED_TO_BLUE, 0.5), [128, 0, 128, 255]);
    }

    #[test]
    fn clamping_outside_range() {
        assert_eq!(evaluate(RED_TO_BLUE, -0.5), [255, 0, 0, 255]);
        assert_eq!(evaluate(RED_TO_BLUE, 1.5), [0, 0, 255, 255]);
    }

    #[test]
    fn alpha_interpolates() {
        let stops = &[
            ColorStop::new(0.0, 0, 0, 0, 0),
            ColorStop::new(1.0, 0, 0, 0, 255),
        ];
        assert_eq!(evaluate(stops, 0.5)[3], 128);
    }

    #[test]
    fn single_stop_is_constant() {
        let stops = &[ColorStop::new(0.0, 10, 20, 30, 255)];
        assert_eq!(evaluate(stops, 0.0), [10, 20, 30, 255]);
        assert_eq!(evaluate(stops, 0.7), [10, 20, 30, 255]);
    }

    #[test]
    fn dense_covers_all_indices() {
        let cm = dense_256(RED_TO_BLUE);
        assert_eq!(cm.len(), 256);
        assert_eq!(cm[&0], [255, 0, 0, 255]);
        assert_eq!(cm[&255], [0, 0, 255, 255]);
        // Red channel is monotonically non-increasing
        let reds: Vec<u8> = cm.values().map(|c| c[0]).collect();
        assert!(reds.windows(2).all(|w| w[0] >= w[1]));
    }
}
