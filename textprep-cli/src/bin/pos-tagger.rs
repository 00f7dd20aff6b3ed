use anyhow::Result;
use clap::Parser;
use textprep_cli::commands::run::TaskArgs;
use textprep_core::Task;

/// Tag each input file, writing `<input>.pos`
#[derive(Debug, Parser)]
#[command(name = "pos-tagger", version, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: TaskArgs,
}

fn main() -> Result<()> {
    Cli::parse().args.execute(Task::Tag)
}
