#![doc = "RegionMap public API"]
mod artifacts;
mod common;
mod error;
mod geom;
mod map;
mod raster;

#[doc(inline)]
pub use error::MapError;

#[doc(inline)]
pub use geom::{Canvas, GlobalBounds, PixelTransform, ProjectionCenter};

#[doc(inline)]
pub use map::{build_regions, find_name, BuildOptions, FeatureCollection, RawFeature, RawGeometry, Region, RegionMap, UNKNOWN_NAME};

#[doc(inline)]
pub use raster::{
    pick_region, region_palette, render_id_map, render_pretty_map, render_pretty_map_seeded,
    PrettyStyle, Rgb, ID_MAP_BACKGROUND, MAX_ID,
};

#[doc(inline)]
pub use common::{ensure_dir_exists, ensure_parent_exists, write_json_file, write_png_file};

#[doc(inline)]
pub use artifacts::{Artifacts, ID_MAP_FILE, PRETTY_MAP_FILE};
