use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "guess-the-hex", about = "Guess the hex code of a color swatch")]
pub struct Args {
    /// JSON config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed the color generator for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for log files
    #[arg(long, value_name = "DIR", default_value = "logs")]
    pub log_dir: PathBuf,
}
