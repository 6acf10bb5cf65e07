use geo::{Coord, LineString, MapCoords};

use crate::geom::GlobalBounds;

/// Pixel dimensions shared by normalization and both rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// Derive the height from `width` and the aspect ratio of `bounds`.
    /// Degenerate bounds give a square canvas. Height is at least one pixel.
    pub fn fit(width: u32, bounds: &GlobalBounds) -> Self {
        let aspect = if bounds.is_degenerate() { 1.0 }
        else { bounds.span_y() / bounds.span_x() };

        let height = ((width as f64 * aspect) as u32).max(1);
        Self { width, height }
    }
}

/// Maps projected coordinates into pixel space with one uniform scale,
/// a fixed margin, and a vertical flip (north up, rows down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelTransform {
    min_x: f64,
    max_y: f64,
    margin: f64,
    scale: f64,
}

impl PixelTransform {
    /// Fit `bounds` inside `canvas` minus `margin` on every side.
    /// The tighter axis sets the scale; degenerate bounds use 1.0.
    pub fn new(bounds: &GlobalBounds, canvas: &Canvas, margin: u32) -> Self {
        let margin = margin as f64;
        let usable_w = canvas.width as f64 - 2.0 * margin;
        let usable_h = canvas.height as f64 - 2.0 * margin;

        let scale = if bounds.is_degenerate() { 1.0 }
        else { (usable_w / bounds.span_x()).min(usable_h / bounds.span_y()) };

        Self { min_x: bounds.min_x(), max_y: bounds.max_y(), margin, scale }
    }

    #[inline] pub fn scale(&self) -> f64 { self.scale }

    #[inline]
    pub fn apply(&self, coord: Coord<f64>) -> Coord<f64> {
        Coord {
            x: self.margin + (coord.x - self.min_x) * self.scale,
            y: self.margin + (self.max_y - coord.y) * self.scale, // flip so north is up
        }
    }

    pub fn apply_ring(&self, ring: &LineString<f64>) -> LineString<f64> {
        ring.map_coords(|coord| self.apply(coord))
    }
}
