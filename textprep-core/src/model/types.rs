use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub segmentation: SegmentationConfig,
    pub tagger: TaggerConfig,
    #[serde(default)]
    pub parser: ParserConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub name: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentationConfig {
    #[serde(default = "default_terminators")]
    pub terminators: Vec<String>,
    #[serde(default)]
    pub abbreviations: Vec<String>,
    #[serde(default)]
    pub start_exceptions: Vec<String>,
    #[serde(default = "default_true")]
    pub paragraph_breaks: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            terminators: default_terminators(),
            abbreviations: Vec::new(),
            start_exceptions: Vec::new(),
            paragraph_breaks: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggerConfig {
    pub default_tag: String,
    /// Tag -> words carrying that tag
    #[serde(default)]
    pub lexicon: HashMap<String, Vec<String>>,
    /// Tag -> word suffixes implying that tag
    #[serde(default)]
    pub suffixes: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub rules: Vec<ContextRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextRule {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub prev_tag: Option<String>,
    #[serde(default)]
    pub next_tag: Option<String>,
    #[serde(default)]
    pub prev_word: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_terminators() -> Vec<String> {
    vec![".".to_string(), "!".to_string(), "?".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_max_length() -> usize {
    crate::DEFAULT_MAX_SENTENCE_LENGTH
}
