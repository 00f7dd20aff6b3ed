use anyhow::Result;
use clap::Parser;
use textprep_cli::commands::Commands;

/// Batch POS tagging, sentence segmentation and parse-tree extraction
#[derive(Debug, Parser)]
#[command(name = "textprep", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
