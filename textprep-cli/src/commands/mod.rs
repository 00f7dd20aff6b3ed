//! CLI command implementations

use crate::CliResult;
use clap::Subcommand;
use textprep_core::Task;

pub mod generate_config;
pub mod run;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tag each input, writing `<input>.pos`
    Tag(run::TaskArgs),

    /// Split each input into sentences, writing `<input>.sen`
    Segment(run::TaskArgs),

    /// Parse each input, writing `<input>.tree`
    Parse(run::TaskArgs),

    /// Check that a model file loads
    ValidateModel(validate::ValidateArgs),

    /// Write a configuration or model template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the preprocessing tasks and their output suffixes
    Tasks,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Tag(args) => args.execute(Task::Tag),
            Commands::Segment(args) => args.execute(Task::Segment),
            Commands::Parse(args) => args.execute(Task::Parse),
            Commands::ValidateModel(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                match subcommand {
                    ListCommands::Tasks => print!("{}", task_listing()),
                }
                Ok(())
            }
        }
    }
}

/// One line per task: name, suffix and whether lines are `<s>` delimited
pub fn task_listing() -> String {
    Task::ALL
        .iter()
        .map(|task| {
            let layout = if task.is_delimited() {
                "<s> ... </s>"
            } else {
                "bracketed tree"
            };
            format!("{:<8} .{:<5} {}\n", task.name(), task.suffix(), layout)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Tasks,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Tasks"));
    }

    #[test]
    fn test_task_listing() {
        let listing = task_listing();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("tag"));
        assert!(lines[0].contains(".pos"));
        assert!(lines[1].contains(".sen"));
        assert!(lines[2].contains(".tree"));
        assert!(lines[2].contains("bracketed tree"));
    }

    #[test]
    fn test_list_executes() {
        let cmd = Commands::List {
            subcommand: ListCommands::Tasks,
        };
        assert!(cmd.execute().is_ok());
    }
}
