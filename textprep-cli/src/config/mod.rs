//! Configuration module
//!
//! Settings come from three places. A flag (or its environment variable)
//! wins over the config file, which wins over the built-in default.

use crate::error::{CliError, CliResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration file structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Model configuration
    #[serde(default)]
    pub model: ModelSection,

    /// Input/output directory configuration
    #[serde(default)]
    pub io: IoSection,

    /// Parser configuration
    #[serde(default)]
    pub parser: ParserSection,
}

/// Model-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ModelSection {
    /// Model file; the embedded English model is used when absent
    pub path: Option<PathBuf>,
}

/// Directory configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct IoSection {
    /// Base directory for relative input paths
    pub input_dir: Option<PathBuf>,

    /// Directory receiving the artifacts; next to each input when absent
    pub output_dir: Option<PathBuf>,
}

/// Parser configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ParserSection {
    /// Sentences longer than this (in tokens) get a flat fallback tree
    pub max_sentence_length: Option<usize>,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> CliResult<Self> {
        let config: Self = toml::from_str(content)?;
        if config.parser.max_sentence_length == Some(0) {
            return Err(CliError::ConfigError(
                "parser.max_sentence_length must be positive".to_string(),
            )
            .into());
        }
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of this configuration
    pub fn resolve(self, overrides: Overrides) -> Settings {
        Settings {
            model: overrides.model.or(self.model.path),
            input_dir: overrides.input_dir.or(self.io.input_dir),
            output_dir: overrides.output_dir.or(self.io.output_dir),
            max_sentence_length: overrides
                .max_sentence_length
                .or(self.parser.max_sentence_length),
        }
    }
}

/// Values given as flags or environment variables
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--model` / `TEXTPREP_MODEL`
    pub model: Option<PathBuf>,
    /// `--input-dir` / `TEXTPREP_INPUT_DIR`
    pub input_dir: Option<PathBuf>,
    /// `--output-dir` / `TEXTPREP_OUTPUT_DIR`
    pub output_dir: Option<PathBuf>,
    /// `--max-length` / `TEXTPREP_MAX_LENGTH`
    pub max_sentence_length: Option<usize>,
}

/// Effective settings for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Model file, `None` for the embedded model
    pub model: Option<PathBuf>,
    /// Base directory for relative inputs
    pub input_dir: Option<PathBuf>,
    /// Artifact directory
    pub output_dir: Option<PathBuf>,
    /// Parser length limit; the model's own limit applies when `None`
    pub max_sentence_length: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_is_default() {
        let config = CliConfig::from_toml_str("").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = CliConfig::from_toml_str(
            r#"
[model]
path = "models/custom.toml"

[io]
input_dir = "corpus"
output_dir = "out"

[parser]
max_sentence_length = 80
"#,
        )
        .unwrap();

        assert_eq!(config.model.path, Some(PathBuf::from("models/custom.toml")));
        assert_eq!(config.io.input_dir, Some(PathBuf::from("corpus")));
        assert_eq!(config.io.output_dir, Some(PathBuf::from("out")));
        assert_eq!(config.parser.max_sentence_length, Some(80));
    }

    #[test]
    fn test_zero_max_length_rejected() {
        let err = CliConfig::from_toml_str("[parser]\nmax_sentence_length = 0\n").unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(CliConfig::from_toml_str("[parser]\nmax_sentence_length = \"long\"\n").is_err());
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = CliConfig {
            model: ModelSection {
                path: Some(PathBuf::from("from-config.toml")),
            },
            io: IoSection {
                input_dir: Some(PathBuf::from("config-in")),
                output_dir: Some(PathBuf::from("config-out")),
            },
            parser: ParserSection {
                max_sentence_length: Some(80),
            },
        };

        let settings = config.resolve(Overrides {
            model: Some(PathBuf::from("from-flag.toml")),
            max_sentence_length: Some(40),
            ..Default::default()
        });

        assert_eq!(settings.model, Some(PathBuf::from("from-flag.toml")));
        assert_eq!(settings.input_dir, Some(PathBuf::from("config-in")));
        assert_eq!(settings.output_dir, Some(PathBuf::from("config-out")));
        assert_eq!(settings.max_sentence_length, Some(40));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[io]\noutput_dir = \"artifacts\"").unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.io.output_dir, Some(PathBuf::from("artifacts")));
        assert_eq!(CliConfig::load(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = CliConfig::from_file(Path::new("/nonexistent/textprep.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
