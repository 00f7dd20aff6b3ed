//! Validate-model command implementation

use crate::CliResult;
use clap::Args;
use std::path::PathBuf;
use textprep_core::Model;

/// Arguments for the validate-model command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the model file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub model: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate-model command
    pub fn execute(&self) -> CliResult<()> {
        println!("Validating model: {}", self.model.display());

        match Model::from_file(&self.model) {
            Ok(model) => {
                let config = model.config();
                println!("✓ Model is valid!");
                println!("  Name: {}", model.name());
                println!("  Language: {}", model.language());
                println!(
                    "  Lexicon tags: {}, suffix tags: {}, context rules: {}",
                    config.tagger.lexicon.len(),
                    config.tagger.suffixes.len(),
                    model.rules().len()
                );
                println!("  Max sentence length: {}", model.max_length());
                Ok(())
            }
            Err(e) => {
                println!("✗ Model is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
