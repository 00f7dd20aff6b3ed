use super::NlpCapability;
use crate::error::{CoreError, Result};
use crate::types::{ParseTree, Sentence, TaggedToken, Task};

/// Turns the text of one document into an ordered list of units
pub trait Analyzer {
    /// One analyzed sentence
    type Unit;

    /// The task this analyzer performs
    fn task(&self) -> Task;

    /// Analyze a whole document
    fn analyze(&self, text: &str) -> Result<Vec<Self::Unit>>;
}

/// Sentence segmentation: one token list per sentence
pub struct SegmentAnalyzer<C> {
    capability: C,
}

impl<C: NlpCapability> SegmentAnalyzer<C> {
    /// Wrap a capability
    pub fn new(capability: C) -> Self {
        Self { capability }
    }
}

impl<C: NlpCapability> Analyzer for SegmentAnalyzer<C> {
    type Unit = Sentence;

    fn task(&self) -> Task {
        Task::Segment
    }

    fn analyze(&self, text: &str) -> Result<Vec<Sentence>> {
        self.capability.segment(text)
    }
}

/// POS tagging: one tagged token list per sentence
pub struct TagAnalyzer<C> {
    capability: C,
}

impl<C: NlpCapability> TagAnalyzer<C> {
    /// Wrap a capability
    pub fn new(capability: C) -> Self {
        Self { capability }
    }
}

impl<C: NlpCapability> Analyzer for TagAnalyzer<C> {
    type Unit = Vec<TaggedToken>;

    fn task(&self) -> Task {
        Task::Tag
    }

    fn analyze(&self, text: &str) -> Result<Vec<Vec<TaggedToken>>> {
        self.capability
            .segment(text)?
            .iter()
            .map(|sentence| {
                let tagged = self.capability.tag(sentence)?;
                if tagged.len() != sentence.len() {
                    return Err(CoreError::capability(
                        "tag",
                        format!(
                            "{} returned {} tags for {} tokens",
                            self.capability.name(),
                            tagged.len(),
                            sentence.len()
                        ),
                    ));
                }
                Ok(tagged)
            })
            .collect()
    }
}

/// Parsing: one tree per sentence, without the `ROOT` wrapper
pub struct ParseAnalyzer<C> {
    capability: C,
    max_length: usize,
}

impl<C: NlpCapability> ParseAnalyzer<C> {
    /// Wrap a capability with a sentence length limit
    pub fn new(capability: C, max_length: usize) -> Self {
        Self {
            capability,
            max_length,
        }
    }

    /// The sentence length limit passed to the parser
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl<C: NlpCapability> Analyzer for ParseAnalyzer<C> {
    type Unit = ParseTree;

    fn task(&self) -> Task {
        Task::Parse
    }

    fn analyze(&self, text: &str) -> Result<Vec<ParseTree>> {
        self.capability
            .segment(text)?
            .iter()
            .map(|sentence| {
                self.capability
                    .parse(sentence, self.max_length)?
                    .into_first_child()
                    .ok_or_else(|| {
                        CoreError::capability("parse", "parser returned a tree without children")
                    })
            })
            .collect()
    }
}
