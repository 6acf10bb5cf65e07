use anyhow::Result;
use image::RgbImage;
use tiny_skia::{Color, FillRule, Paint, Transform};

use crate::{
    geom::Canvas,
    map::Region,
    raster::{new_pixmap, ring_to_path, to_rgb_image, Rgb},
};

/// Color of pixels outside every region. Equal to the color of id 0, so a
/// consumer cannot tell region 0 from background by color alone.
pub const ID_MAP_BACKGROUND: Rgb = Rgb::new(0, 0, 0);

/// Render the pick raster: every region interior filled with its id color.
///
/// Draw order is ascending region id, then polygon order within a region;
/// where polygons overlap the later one wins. Fills are aliased so boundary
/// pixels never blend two ids.
pub fn render_id_map(regions: &[Region], canvas: &Canvas) -> Result<RgbImage> {
    let mut pixmap = new_pixmap(canvas)?;
    let bg = ID_MAP_BACKGROUND;
    pixmap.fill(Color::from_rgba8(bg.r, bg.g, bg.b, 255));

    let mut ordered: Vec<&Region> = regions.iter().collect();
    ordered.sort_by_key(|region| region.id());

    let mut paint = Paint::default();
    paint.anti_alias = false;

    for region in ordered {
        let color = region.id_color();
        paint.set_color_rgba8(color.r, color.g, color.b, 255);
        for path in region.polygons().iter().filter_map(ring_to_path) {
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    Ok(to_rgb_image(&pixmap))
}

/// Region id under pixel (x, y) of an id map, `None` outside the image.
/// Background pixels decode as id 0.
pub fn pick_region(id_map: &RgbImage, x: u32, y: u32) -> Option<u32> {
    id_map.get_pixel_checked(x, y).map(|&pixel| Rgb::from(pixel).to_id())
}
