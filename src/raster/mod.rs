mod color;
mod id_map;
mod path;
mod pretty;

pub use color::{Rgb, MAX_ID};
pub use id_map::{pick_region, render_id_map, ID_MAP_BACKGROUND};
pub use pretty::{region_palette, render_pretty_map, render_pretty_map_seeded, PrettyStyle};

pub(crate) use path::*;
