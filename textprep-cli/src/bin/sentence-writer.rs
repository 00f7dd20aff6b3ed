use anyhow::Result;
use clap::Parser;
use textprep_cli::commands::run::TaskArgs;
use textprep_core::Task;

/// Split each input file into sentences, writing `<input>.sen`
#[derive(Debug, Parser)]
#[command(name = "sentence-writer", version, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: TaskArgs,
}

fn main() -> Result<()> {
    Cli::parse().args.execute(Task::Segment)
}
