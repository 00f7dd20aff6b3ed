//! Batch text preprocessing
//!
//! This crate turns plain-text documents into per-sentence artifacts:
//! part-of-speech tag sequences (`.pos`), tokenized sentences (`.sen`) and
//! bracketed parse trees (`.tree`). The linguistic work is behind the
//! [`NlpCapability`] trait; [`RuleBasedNlp`] is the built-in backend driven
//! by a TOML [`Model`].

#![warn(missing_docs)]

pub mod capability;
pub mod error;
pub mod format;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod tagger;
pub mod tokenizer;
pub mod types;

// Re-export key types
pub use capability::{
    Analyzer, NlpCapability, ParseAnalyzer, RuleBasedNlp, SegmentAnalyzer, TagAnalyzer,
};
pub use error::{CoreError, Result};
pub use format::{preview, SentenceFormatter, TagFormatter, TreeFormatter, UnitFormatter};
pub use model::Model;
pub use pipeline::{
    BatchReport, BatchTextProcessor, DocumentReport, DocumentStatus, OutputLayout,
    ProgressObserver, SilentObserver,
};
pub use types::{ParseTree, Sentence, TaggedToken, Task, Token};

/// Number of characters of a formatted line shown in progress notifications
pub const PREVIEW_CHARS: usize = 100;

/// Default maximum sentence length (in tokens) handed to the parser
pub const DEFAULT_MAX_SENTENCE_LENGTH: usize = 100;
