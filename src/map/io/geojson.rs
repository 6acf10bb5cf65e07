use std::path::Path;

use anyhow::{Context, Result};

use crate::{common, map::FeatureCollection};

impl FeatureCollection {
    /// Parse a geometry collection from GeoJSON bytes.
    pub fn from_geojson_bytes(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).context("Failed to parse GeoJSON feature collection")
    }

    /// Read and parse a GeoJSON file.
    pub fn read_from_geojson_file(path: &Path) -> Result<Self> {
        let bytes = common::read_file(path)?;
        Self::from_geojson_bytes(&bytes)
            .with_context(|| format!("[read_geojson] {}", path.display()))
    }
}
