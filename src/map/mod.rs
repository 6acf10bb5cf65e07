mod build;
mod feature;
mod io;
mod region;

pub use build::{build_regions, BuildOptions, RegionMap};
pub use feature::{find_name, FeatureCollection, RawFeature, RawGeometry, UNKNOWN_NAME};
pub use region::Region;
