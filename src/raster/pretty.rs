use std::ops::RangeInclusive;

use anyhow::Result;
use image::RgbaImage;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tiny_skia::{Color, FillRule, Paint, Stroke, Transform};

use crate::{
    geom::Canvas,
    map::Region,
    raster::{new_pixmap, ring_to_path, to_rgba_image},
};

/// Look of the preview raster.
#[derive(Debug, Clone, PartialEq)]
pub struct PrettyStyle {
    /// Canvas fill, RGBA.
    pub background: [u8; 4],
    /// Outline color, RGBA.
    pub border: [u8; 4],
    /// Outline stroke width in pixels.
    pub border_width: f32,
    /// Range each fill channel is drawn from.
    pub channel_range: RangeInclusive<u8>,
    /// Seed of the palette generator.
    pub seed: u64,
}

impl Default for PrettyStyle {
    fn default() -> Self {
        Self {
            background: [245, 245, 245, 255],
            border: [0, 0, 0, 255],
            border_width: 2.0,
            channel_range: 100..=200,
            seed: 42,
        }
    }
}

fn rgba(color: [u8; 4]) -> Color {
    Color::from_rgba8(color[0], color[1], color[2], color[3])
}

/// Draw `count` opaque fill colors, one per region in id order.
pub fn region_palette<R: Rng + ?Sized>(count: usize, channel_range: &RangeInclusive<u8>, rng: &mut R) -> Vec<[u8; 4]> {
    let (lo, hi) = (*channel_range.start(), *channel_range.end());
    let range = lo.min(hi)..=hi.max(lo);
    (0..count)
        .map(|_| [
            rng.random_range(range.clone()),
            rng.random_range(range.clone()),
            rng.random_range(range.clone()),
            255,
        ])
        .collect()
}

/// Render the preview raster with colors drawn from `rng`.
///
/// All fills are drawn first, then every outline, so borders are never
/// covered by a later region's fill. Overlapping fills: higher id on top.
pub fn render_pretty_map<R: Rng + ?Sized>(
    regions: &[Region],
    canvas: &Canvas,
    style: &PrettyStyle,
    rng: &mut R,
) -> Result<RgbaImage> {
    let mut pixmap = new_pixmap(canvas)?;
    pixmap.fill(rgba(style.background));

    let mut ordered: Vec<&Region> = regions.iter().collect();
    ordered.sort_by_key(|region| region.id());
    let palette = region_palette(ordered.len(), &style.channel_range, rng);

    // Fill pass
    let mut paint = Paint::default();
    for (region, fill) in ordered.iter().zip(&palette) {
        paint.set_color(rgba(*fill));
        for path in region.polygons().iter().filter_map(ring_to_path) {
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    // Border pass
    paint.set_color(rgba(style.border));
    let stroke = Stroke { width: style.border_width, ..Stroke::default() };
    for region in &ordered {
        for path in region.polygons().iter().filter_map(ring_to_path) {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    Ok(to_rgba_image(&pixmap))
}

/// [`render_pretty_map`] with a generator seeded from `style.seed`, so the
/// same dataset always gets the same palette.
pub fn render_pretty_map_seeded(regions: &[Region], canvas: &Canvas, style: &PrettyStyle) -> Result<RgbaImage> {
    let mut rng = StdRng::seed_from_u64(style.seed);
    render_pretty_map(regions, canvas, style, &mut rng)
}
