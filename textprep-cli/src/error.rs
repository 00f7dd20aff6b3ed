//! Error handling for the CLI application

use std::fmt;

/// CLI-specific errors raised before the pipeline runs
#[derive(Debug)]
pub enum CliError {
    /// No input files were given or none could be resolved
    NoInputs,
    /// Invalid glob pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NoInputs => write!(f, "No input files given"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
