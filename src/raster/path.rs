use geo::LineString;
use image::{RgbImage, RgbaImage};
use tiny_skia::{Path, PathBuilder, Pixmap};

use crate::{geom::Canvas, MapError};

/// Allocate a pixmap for `canvas`.
pub(crate) fn new_pixmap(canvas: &Canvas) -> Result<Pixmap, MapError> {
    Pixmap::new(canvas.width, canvas.height)
        .ok_or(MapError::Canvas { width: canvas.width, height: canvas.height })
}

/// Build a closed path from a pixel-space ring: "M x,y L x,y ... Z".
/// Rings with fewer than two distinct vertices give `None`.
pub(crate) fn ring_to_path(ring: &LineString<f64>) -> Option<Path> {
    let mut coords = ring.0.iter();
    let first = coords.next()?;
    if ring.0.iter().all(|coord| coord == first) { return None }

    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for coord in coords {
        pb.line_to(coord.x as f32, coord.y as f32);
    }
    pb.close();
    pb.finish()
}

/// Copy an opaque pixmap into an RGB image, dropping alpha.
pub(crate) fn to_rgb_image(pixmap: &Pixmap) -> RgbImage {
    let width = pixmap.width();
    let pixels = pixmap.pixels();
    RgbImage::from_fn(width, pixmap.height(), |x, y| {
        let c = pixels[(y * width + x) as usize].demultiply();
        image::Rgb([c.red(), c.green(), c.blue()])
    })
}

/// Copy a pixmap into a straight-alpha RGBA image.
pub(crate) fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let pixels = pixmap.pixels();
    RgbaImage::from_fn(width, pixmap.height(), |x, y| {
        let c = pixels[(y * width + x) as usize].demultiply();
        image::Rgba([c.red(), c.green(), c.blue(), c.alpha()])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let err = new_pixmap(&Canvas { width: 0, height: 10 }).unwrap_err();
        assert_eq!(err, MapError::Canvas { width: 0, height: 10 });
    }

    #[test]
    fn empty_and_single_point_rings_have_no_path() {
        assert!(ring_to_path(&LineString::new(vec![])).is_none());
        assert!(ring_to_path(&LineString::from(vec![(3.0, 3.0)])).is_none());
    }

    #[test]
    fn repeated_single_vertex_has_no_path() {
        assert!(ring_to_path(&LineString::from(vec![(3.0, 3.0), (3.0, 3.0)])).is_none());
        assert!(ring_to_path(&LineString::from(vec![(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)])).is_none());
        assert!(ring_to_path(&LineString::from(vec![(3.0, 3.0), (5.0, 3.0)])).is_some());
    }

    #[test]
    fn triangle_path_bounds() {
        let path = ring_to_path(&LineString::from(vec![(1.0, 2.0), (9.0, 2.0), (5.0, 8.0)])).unwrap();
        let bounds = path.bounds();
        assert_eq!((bounds.left(), bounds.top(), bounds.right(), bounds.bottom()), (1.0, 2.0, 9.0, 8.0));
    }
}
