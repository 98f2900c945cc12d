use anyhow::Result;
use clap::Parser;

use guess_the_hex::{args::Args, config::GameConfig, logging, ui::run_ui};

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = logging::init(&args.log_dir);

    let config = GameConfig::load(args.config.as_deref())?;
    tracing::info!(?config, seed = ?args.seed, "starting");

    run_ui(config, args.seed)
}
