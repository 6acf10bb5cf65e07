mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::build;
use tracing_subscriber::{fmt, EnvFilter};

/// Log level from `-v` count, unless RUST_LOG says otherwise.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Build(args) => build::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
