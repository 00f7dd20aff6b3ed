//! Error types for the preprocessing pipeline
//!
//! Only [`CoreError::InputRead`] is recovered by the batch processor; every
//! other variant aborts the batch.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading models, analyzing text or writing artifacts
#[derive(Error, Debug)]
pub enum CoreError {
    /// An input document is missing or unreadable
    #[error("failed to read input {}: {reason}", path.display())]
    InputRead {
        /// The input that could not be read
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// A model file is missing, malformed or inconsistent
    #[error("failed to load model {}: {reason}", path.display())]
    ModelLoad {
        /// Location of the model
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// The NLP capability failed on otherwise readable input
    #[error("{stage} failed: {reason}")]
    Capability {
        /// Which capability call failed (segment, tag, parse)
        stage: &'static str,
        /// Underlying cause
        reason: String,
    },

    /// An output artifact could not be created or written
    #[error("failed to write output {}: {reason}", path.display())]
    OutputWrite {
        /// The artifact being written
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },
}

impl CoreError {
    /// Build an [`CoreError::InputRead`] from an I/O error
    pub fn input_read(path: &Path, err: std::io::Error) -> Self {
        CoreError::InputRead {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }

    /// Build an [`CoreError::OutputWrite`] from an I/O error
    pub fn output_write(path: &Path, err: std::io::Error) -> Self {
        CoreError::OutputWrite {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }

    /// Build a [`CoreError::Capability`] error
    pub fn capability<S: Into<String>>(stage: &'static str, reason: S) -> Self {
        CoreError::Capability {
            stage,
            reason: reason.into(),
        }
    }

    /// Whether the batch may continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CoreError::InputRead { .. })
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
