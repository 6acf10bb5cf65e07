use geo::{Coord, LineString, MapCoords};

use crate::geom::GlobalBounds;

/// Shared reference point of the equirectangular projection.
///
/// Computed once from the lon/lat bounds of the whole dataset:
///   x = (lon - lon0) * cos(lat0)
///   y = lat - lat0
/// Only meaningful for regionally bounded extents; error grows with angular
/// span and distance from the reference parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionCenter {
    lon0: f64,
    lat0: f64,
    cos_lat0: f64,
}

impl ProjectionCenter {
    /// Center at the given reference longitude/latitude (degrees).
    pub fn new(lon0: f64, lat0: f64) -> Self {
        Self { lon0, lat0, cos_lat0: lat0.to_radians().cos() }
    }

    /// Midpoint of the min/max longitude and latitude of every point.
    pub fn from_lonlat_bounds(bounds: &GlobalBounds) -> Self {
        let center = bounds.center();
        Self::new(center.x, center.y)
    }

    #[inline] pub fn lon0(&self) -> f64 { self.lon0 }
    #[inline] pub fn lat0(&self) -> f64 { self.lat0 }

    /// Project a single lon/lat coordinate into local planar units.
    #[inline]
    pub fn project(&self, coord: Coord<f64>) -> Coord<f64> {
        Coord {
            x: (coord.x - self.lon0) * self.cos_lat0,
            y: coord.y - self.lat0,
        }
    }

    /// Project a ring, keeping vertex count and order.
    pub fn project_ring(&self, ring: &LineString<f64>) -> LineString<f64> {
        ring.map_coords(|coord| self.project(coord))
    }
}
