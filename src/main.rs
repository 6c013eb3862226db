use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use amedas_series::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "amedas_series=debug"
    } else {
        "amedas_series=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    run(cli).context("command failed")
}
