use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kanji-fetch")]
#[command(about = "Fetch kanji dictionary entries and images in one batch.")]
#[command(version)]
pub struct Cli {
    /// Read configuration from this TOML file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Don't number the results
    #[arg(long)]
    pub unnumbered: bool,
}
