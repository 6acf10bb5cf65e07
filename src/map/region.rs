use geo::LineString;

use crate::raster::Rgb;

/// One pickable region in image-pixel coordinates.
///
/// `id` is dense, 0-based and follows input order. It is the only key used
/// for color encoding and JSON output.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: u32,
    name: String,
    polygons: Vec<LineString<f64>>,
}

impl Region {
    pub fn new(id: u32, name: impl Into<String>, polygons: Vec<LineString<f64>>) -> Self {
        Self { id, name: name.into(), polygons }
    }

    #[inline] pub fn id(&self) -> u32 { self.id }
    #[inline] pub fn name(&self) -> &str { &self.name }

    /// Outer rings in pixel space, each non-closed.
    #[inline] pub fn polygons(&self) -> &[LineString<f64>] { &self.polygons }

    /// Color encoding this region's id in the id map.
    #[inline] pub fn id_color(&self) -> Rgb { Rgb::from_id(self.id) }

    /// Lowercase `rrggbb` form of [`Region::id_color`].
    #[inline] pub fn id_color_html(&self) -> String { self.id_color().to_hex() }
}
