use anyhow::{Context, Result};
use regionmap::{Artifacts, BuildOptions, FeatureCollection, PrettyStyle, RegionMap};
use tracing::info;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::BuildArgs) -> Result<()> {
    // 1) Build regions (image-space polygons)
    info!("[build] loading features from {}", args.geojson.display());
    let collection = FeatureCollection::read_from_geojson_file(&args.geojson)?;

    let options = BuildOptions { width: args.width, margin: args.margin };
    let map = RegionMap::from_features(&collection, &options)
        .with_context(|| format!("[build] no map built from {}", args.geojson.display()))?;

    // 2) Serialize JSON and render both maps before touching the filesystem
    let style = PrettyStyle { seed: args.seed, ..PrettyStyle::default() };
    let artifacts = Artifacts::render(&map, &style)?;

    // 3) Write everything
    artifacts.write(&args.out_json, &args.out_pngs)?;

    let canvas = map.canvas();
    info!("[OK] Wrote {} regions -> {}", map.len(), args.out_json.display());
    info!("[OK] Wrote PNG maps {}x{} -> {}", canvas.width, canvas.height, args.out_pngs.display());

    Ok(())
}
