//! saavn-catalog - query the JioSaavn catalog from the command line.

use clap::Parser;
use saavn_catalog::{cli, config, logging};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Installed first so config loading is logged
    let log = logging::init()?;

    let config = match &args.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    log.apply(&config.logging)?;

    tracing::debug!(base_url = %config.catalog.base_url, "Configuration ready");

    cli::run_command(&args, &config)
}
