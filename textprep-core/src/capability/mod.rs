//! NLP capability seam
//!
//! [`NlpCapability`] is the only thing the pipeline needs from an NLP
//! backend. The task analyzers adapt it to the per-task unit types consumed
//! by the formatters.

mod analyzer;
mod rule_based;

pub use analyzer::{Analyzer, ParseAnalyzer, SegmentAnalyzer, TagAnalyzer};
pub use rule_based::RuleBasedNlp;

use crate::error::Result;
use crate::types::{ParseTree, Sentence, TaggedToken, Token};

/// Tokenization, tagging and parsing backend
///
/// Models are loaded once when the backend is constructed, not per call.
pub trait NlpCapability {
    /// Tokenize raw text and split it into sentences
    fn segment(&self, text: &str) -> Result<Vec<Sentence>>;

    /// Tag one sentence; the result must hold one entry per token
    fn tag(&self, tokens: &[Token]) -> Result<Vec<TaggedToken>>;

    /// Parse one sentence into a tree rooted at a `ROOT` node
    ///
    /// Sentences longer than `max_length` tokens may get a fallback tree.
    fn parse(&self, tokens: &[Token], max_length: usize) -> Result<ParseTree>;

    /// Human-readable backend name for logs
    fn name(&self) -> &str {
        "nlp"
    }
}

impl<C: NlpCapability + ?Sized> NlpCapability for &C {
    fn segment(&self, text: &str) -> Result<Vec<Sentence>> {
        (**self).segment(text)
    }

    fn tag(&self, tokens: &[Token]) -> Result<Vec<TaggedToken>> {
        (**self).tag(tokens)
    }

    fn parse(&self, tokens: &[Token], max_length: usize) -> Result<ParseTree> {
        (**self).parse(tokens, max_length)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
