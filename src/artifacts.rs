use std::path::{Path, PathBuf};

use anyhow::Result;
use image::{RgbImage, RgbaImage};
use serde_json::Value;
use tracing::info;

use crate::{common, raster, PrettyStyle, RegionMap};

/// File name of the id map inside the raster output directory.
pub const ID_MAP_FILE: &str = "id_img.png";

/// File name of the preview map inside the raster output directory.
pub const PRETTY_MAP_FILE: &str = "pretty_img.png";

/// Every output of one run, fully rendered in memory before anything is written.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub document: Value,
    pub id_map: RgbImage,
    pub pretty_map: RgbaImage,
}

impl Artifacts {
    /// Serialize and rasterize a built map.
    pub fn render(map: &RegionMap, style: &PrettyStyle) -> Result<Self> {
        let canvas = map.canvas();
        Ok(Self {
            document: map.to_json(),
            id_map: raster::render_id_map(map.regions(), &canvas)?,
            pretty_map: raster::render_pretty_map_seeded(map.regions(), &canvas, style)?,
        })
    }

    /// Write the JSON document to `out_json` and both PNGs into `out_pngs`,
    /// creating directories as needed. Returns the two PNG paths.
    pub fn write(&self, out_json: &Path, out_pngs: &Path) -> Result<(PathBuf, PathBuf)> {
        common::ensure_parent_exists(out_json)?;
        common::ensure_dir_exists(out_pngs)?;

        common::write_json_file(out_json, &self.document)?;
        info!("[write] {}", out_json.display());

        let id_path = out_pngs.join(ID_MAP_FILE);
        common::write_png_file(&id_path, &self.id_map)?;
        info!("[write] {}", id_path.display());

        let pretty_path = out_pngs.join(PRETTY_MAP_FILE);
        common::write_png_file(&pretty_path, &self.pretty_map)?;
        info!("[write] {}", pretty_path.display());

        Ok((id_path, pretty_path))
    }
}
