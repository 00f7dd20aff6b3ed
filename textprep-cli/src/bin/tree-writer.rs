use anyhow::Result;
use clap::Parser;
use textprep_cli::commands::run::TaskArgs;
use textprep_core::Task;

/// Parse each input file, writing `<input>.tree`
#[derive(Debug, Parser)]
#[command(name = "tree-writer", version, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: TaskArgs,
}

fn main() -> Result<()> {
    Cli::parse().args.execute(Task::Parse)
}
