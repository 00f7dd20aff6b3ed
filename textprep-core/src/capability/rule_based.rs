use super::NlpCapability;
use crate::error::Result;
use crate::model::Model;
use crate::parser::ShallowParser;
use crate::tagger::LexiconTagger;
use crate::tokenizer::Tokenizer;
use crate::types::{ParseTree, Sentence, TaggedToken, Token};
use std::path::Path;

/// Built-in backend: PTB tokenizer, lexicon tagger and shallow parser
#[derive(Debug, Clone)]
pub struct RuleBasedNlp {
    model: Model,
    parser: ShallowParser,
}

impl RuleBasedNlp {
    /// Create a backend around an already loaded model
    pub fn new(model: Model) -> Self {
        Self {
            model,
            parser: ShallowParser::new(),
        }
    }

    /// Backend using the embedded English model
    pub fn english() -> Result<Self> {
        Ok(Self::new(Model::english()?))
    }

    /// Load a model file and build a backend around it
    pub fn from_model_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Model::from_file(path)?))
    }

    /// The model in use
    pub fn model(&self) -> &Model {
        &self.model
    }
}

impl NlpCapability for RuleBasedNlp {
    fn segment(&self, text: &str) -> Result<Vec<Sentence>> {
        Ok(Tokenizer::new(&self.model).segment(text))
    }

    fn tag(&self, tokens: &[Token]) -> Result<Vec<TaggedToken>> {
        Ok(LexiconTagger::new(&self.model).tag(tokens))
    }

    fn parse(&self, tokens: &[Token], max_length: usize) -> Result<ParseTree> {
        let tagged = self.tag(tokens)?;
        self.parser.parse(&tagged, max_length)
    }

    fn name(&self) -> &str {
        self.model.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_segment_and_tag() {
        let nlp = RuleBasedNlp::english().unwrap();
        let sentences = nlp.segment("The cat sat. It is big.").unwrap();
        assert_eq!(sentences.len(), 2);

        let tagged = nlp.tag(&sentences[0]).unwrap();
        let tags: Vec<&str> = tagged.iter().map(|t| t.tag.as_str()).collect();
        assert_eq!(tags, vec!["DT", "NN", "VBD", "."]);
    }

    #[test]
    fn test_parse_returns_rooted_tree() {
        let nlp = RuleBasedNlp::english().unwrap();
        let sentences = nlp.segment("The cat sat.").unwrap();
        let tree = nlp.parse(&sentences[0], 100).unwrap();
        assert_eq!(tree.label, "ROOT");
        assert_eq!(tree.leaf_count(), 4);
    }

    #[test]
    fn test_missing_model_file() {
        let result = RuleBasedNlp::from_model_file("/nonexistent/english.toml");
        assert!(matches!(result, Err(CoreError::ModelLoad { .. })));
    }

    #[test]
    fn test_name_is_model_name() {
        let nlp = RuleBasedNlp::english().unwrap();
        assert_eq!(nlp.name(), "english-rules");
    }
}
