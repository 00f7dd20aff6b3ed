//! textprep CLI library
//!
//! Argument parsing, configuration, input resolution, console progress and
//! run summaries for the `textprep` binary and the single-task binaries.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
