//! Generate-config command implementation

use crate::CliResult;
use anyhow::{bail, Context};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// What to generate
    #[arg(short, long, value_enum, default_value = "cli")]
    pub kind: TemplateKind,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

/// Template kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TemplateKind {
    /// Run configuration for `--config`
    Cli,
    /// Copy of the built-in English model, for customizing
    Model,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        let template = match self.kind {
            TemplateKind::Cli => cli_template(),
            TemplateKind::Model => textprep_core::model::ENGLISH_MODEL_TOML.to_string(),
        };

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        match self.kind {
            TemplateKind::Cli => {
                println!("1. Edit the paths and limits");
                println!(
                    "2. Use it: textprep tag --config {} <file>...",
                    self.output.display()
                );
            }
            TemplateKind::Model => {
                println!("1. Edit the lexicon, suffixes and rules");
                println!(
                    "2. Validate it: textprep validate-model -m {}",
                    self.output.display()
                );
            }
        }

        Ok(())
    }
}

/// Commented run configuration with every option present
pub fn cli_template() -> String {
    format!(
        r#"# textprep run configuration
#
# Flags and TEXTPREP_* environment variables override these values.

[model]
# Model file; the built-in English model is used when unset
# path = "models/english.toml"

[io]
# Relative input paths are resolved against this directory
# input_dir = "corpus"
# Artifacts are written here, mirroring the layout under input_dir
# output_dir = "artifacts"

[parser]
# Longer sentences get a flat (X ...) tree
max_sentence_length = {}
"#,
        textprep_core::DEFAULT_MAX_SENTENCE_LENGTH
    )
}
