use anyhow::{Context, Result};
use geo::{Coord, LineString};
use tracing::{debug, info};

use crate::{
    geom::{Canvas, GlobalBounds, PixelTransform, ProjectionCenter},
    map::{FeatureCollection, Region},
    MapError,
};

/// Knobs for turning lon/lat features into pixel-space regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Target raster width in pixels; height is derived.
    pub width: u32,
    /// Padding reserved on every side of the canvas, in pixels.
    pub margin: u32,
}

impl Default for BuildOptions {
    fn default() -> Self { Self { width: 2048, margin: 10 } }
}

/// All regions of one build plus the canvas they were normalized into.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionMap {
    regions: Vec<Region>,
    canvas: Canvas,
    center: ProjectionCenter,
    bounds: GlobalBounds,
}

/// Features that survived extraction, still in lon/lat.
struct Extracted {
    name: String,
    rings: Vec<LineString<f64>>,
}

fn all_coords(rings: &[Vec<LineString<f64>>]) -> impl Iterator<Item = &Coord<f64>> {
    rings.iter().flatten().flat_map(|ring| ring.0.iter())
}

impl RegionMap {
    /// Run extraction, projection and normalization over the whole dataset.
    ///
    /// The projection center and the pixel bounds are each computed once from
    /// every point before any feature is transformed. Features with no outer
    /// ring are skipped and do not consume an id; an empty outer ring still
    /// counts as one.
    pub fn from_features(collection: &FeatureCollection, options: &BuildOptions) -> Result<Self> {
        // 1) Extract outer rings and names.
        let mut extracted = Vec::with_capacity(collection.features.len());
        for (index, feature) in collection.features.iter().enumerate() {
            let rings = match &feature.geometry {
                Some(geometry) => geometry.outer_rings(index)?,
                None => Vec::new(),
            };
            if rings.is_empty() {
                debug!(feature = index, "skipping feature without polygon geometry");
                continue;
            }
            extracted.push(Extracted { name: feature.name(), rings });
        }
        info!("[build] {} of {} features carry polygons", extracted.len(), collection.features.len());

        let (names, lonlat): (Vec<String>, Vec<Vec<LineString<f64>>>) = extracted.into_iter()
            .map(|Extracted { name, rings }| (name, rings))
            .unzip();

        // 2) Shared projection center from every lon/lat point.
        let lonlat_bounds = GlobalBounds::from_coords(all_coords(&lonlat))
            .ok_or(MapError::NoCoordinates)?;
        let center = ProjectionCenter::from_lonlat_bounds(&lonlat_bounds);
        info!("[build] projection center lon0={:.6} lat0={:.6}", center.lon0(), center.lat0());

        let projected: Vec<Vec<LineString<f64>>> = lonlat.iter()
            .map(|rings| rings.iter().map(|ring| center.project_ring(ring)).collect())
            .collect();

        // 3) Shared bounds, canvas and pixel transform.
        let bounds = GlobalBounds::from_coords(all_coords(&projected))
            .ok_or(MapError::NoCoordinates)?;
        let canvas = Canvas::fit(options.width, &bounds);
        let transform = PixelTransform::new(&bounds, &canvas, options.margin);
        if bounds.is_degenerate() {
            debug!("degenerate extent, using unit aspect and scale");
        }
        info!("[build] canvas {}x{} (scale {:.4})", canvas.width, canvas.height, transform.scale());

        // 4) Regions in surviving input order.
        let regions = names.into_iter().zip(projected)
            .enumerate()
            .map(|(idx, (name, rings))| {
                let id = u32::try_from(idx).context("region count exceeds u32")?;
                let polygons = rings.iter().map(|ring| transform.apply_ring(ring)).collect();
                Ok(Region::new(id, name, polygons))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { regions, canvas, center, bounds })
    }

    #[inline] pub fn regions(&self) -> &[Region] { &self.regions }
    #[inline] pub fn canvas(&self) -> Canvas { self.canvas }
    #[inline] pub fn len(&self) -> usize { self.regions.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.regions.is_empty() }

    /// Projection center used for this build.
    #[inline] pub fn center(&self) -> ProjectionCenter { self.center }

    /// Bounds of the projected (pre-pixel) points.
    #[inline] pub fn bounds(&self) -> GlobalBounds { self.bounds }
}

/// Convenience wrapper returning the regions and canvas dimensions.
pub fn build_regions(collection: &FeatureCollection, options: &BuildOptions) -> Result<(Vec<Region>, Canvas)> {
    let map = RegionMap::from_features(collection, options)?;
    Ok((map.regions, map.canvas))
}
