use std::path::PathBuf;

/// Game map builder (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "regionmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Build map JSON + id PNG + preview PNG from GeoJSON
    Build(BuildArgs),
}

#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Input GeoJSON file
    #[arg(long, default_value = "../geo_jsons/br_states.json", value_hint = clap::ValueHint::FilePath)]
    pub geojson: PathBuf,

    /// Output JSON file for the game
    #[arg(long, default_value = "../datasets/out.json", value_hint = clap::ValueHint::FilePath)]
    pub out_json: PathBuf,

    /// Output directory for the PNG maps
    #[arg(long, default_value = "../datasets", value_hint = clap::ValueHint::DirPath)]
    pub out_pngs: PathBuf,

    /// Width of the maps in pixels (height derived from the data)
    #[arg(long, default_value_t = 2048)]
    pub width: u32,

    /// Padding around the polygons in pixels
    #[arg(long, default_value_t = 10)]
    pub margin: u32,

    /// Seed of the preview map palette
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}
