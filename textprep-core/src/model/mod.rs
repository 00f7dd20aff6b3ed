//! Model loading for the rule-based backend
//!
//! A model is a TOML document with `[metadata]`, `[segmentation]`,
//! `[tagger]` and `[parser]` sections. The English model ships inside the
//! crate; other models are loaded with [`Model::from_file`].

#[allow(missing_docs)]
pub mod types;

use crate::error::{CoreError, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
pub use types::{ContextRule, ModelConfig};

/// Source text of the built-in English model
pub const ENGLISH_MODEL_TOML: &str = include_str!("../../models/english.toml");

/// Where a model was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// Compiled into the crate
    Embedded(&'static str),
    /// Read from disk
    File(PathBuf),
}

impl ModelSource {
    fn as_path(&self) -> PathBuf {
        match self {
            ModelSource::Embedded(name) => PathBuf::from(format!("<embedded:{name}>")),
            ModelSource::File(path) => path.clone(),
        }
    }
}

impl std::fmt::Display for ModelSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path().display())
    }
}

/// A validated model with its lookup tables built
#[derive(Debug, Clone)]
pub struct Model {
    config: ModelConfig,
    source: ModelSource,
    terminators: HashSet<String>,
    abbreviations: HashSet<String>,
    start_exceptions: HashSet<String>,
    lexicon: HashMap<String, String>,
    /// (suffix, tag), longest suffix first
    suffixes: Vec<(String, String)>,
}

impl Model {
    /// The built-in English model
    pub fn english() -> Result<Self> {
        Self::from_toml_str(ENGLISH_MODEL_TOML, ModelSource::Embedded("english"))
    }

    /// Load and validate a model file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CoreError::ModelLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content, ModelSource::File(path.to_path_buf()))
    }

    /// Parse and validate model TOML
    pub fn from_toml_str(content: &str, source: ModelSource) -> Result<Self> {
        let config: ModelConfig = toml::from_str(content).map_err(|e| CoreError::ModelLoad {
            path: source.as_path(),
            reason: e.to_string(),
        })?;
        Self::from_config(config, source)
    }

    /// Build lookup tables from an already parsed configuration
    pub fn from_config(config: ModelConfig, source: ModelSource) -> Result<Self> {
        let fail = |reason: String| CoreError::ModelLoad {
            path: source.as_path(),
            reason,
        };

        validate(&config).map_err(&fail)?;

        let lexicon = invert_table(&config.tagger.lexicon, "lexicon").map_err(&fail)?;
        let mut suffixes: Vec<(String, String)> =
            invert_table(&config.tagger.suffixes, "suffixes")
                .map_err(&fail)?
                .into_iter()
                .collect();
        // Longest first, then alphabetical so equal lengths are deterministic
        suffixes.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        let seg = &config.segmentation;
        let model = Self {
            terminators: seg.terminators.iter().cloned().collect(),
            abbreviations: seg.abbreviations.iter().map(|a| a.to_lowercase()).collect(),
            start_exceptions: seg.start_exceptions.iter().cloned().collect(),
            lexicon,
            suffixes,
            source,
            config,
        };

        log::debug!(
            "Loaded model '{}' from {} ({} lexicon entries, {} suffix rules, {} context rules)",
            model.name(),
            model.source,
            model.lexicon.len(),
            model.suffixes.len(),
            model.config.tagger.rules.len()
        );

        Ok(model)
    }

    /// Model name from `[metadata]`
    pub fn name(&self) -> &str {
        &self.config.metadata.name
    }

    /// Language code from `[metadata]`
    pub fn language(&self) -> &str {
        &self.config.metadata.language
    }

    /// Where this model came from
    pub fn source(&self) -> &ModelSource {
        &self.source
    }

    /// Raw configuration
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Whether the token ends a sentence
    pub fn is_terminator(&self, token: &str) -> bool {
        self.terminators.contains(token)
    }

    /// Whether the token (with its trailing period) is a known abbreviation
    pub fn is_abbreviation(&self, token: &str) -> bool {
        self.abbreviations.contains(&token.to_lowercase())
    }

    /// Whether the token may not begin a sentence
    pub fn is_start_exception(&self, token: &str) -> bool {
        self.start_exceptions.contains(token)
    }

    /// Whether blank lines force a sentence end
    pub fn paragraph_breaks(&self) -> bool {
        self.config.segmentation.paragraph_breaks
    }

    /// Lexicon lookup (keys are lowercase)
    pub fn lexicon_tag(&self, word: &str) -> Option<&str> {
        self.lexicon.get(word).map(String::as_str)
    }

    /// Tag implied by the longest matching suffix
    ///
    /// The suffix must be strictly shorter than the word.
    pub fn suffix_tag(&self, word: &str) -> Option<&str> {
        self.suffixes
            .iter()
            .find(|(suffix, _)| word.len() > suffix.len() && word.ends_with(suffix.as_str()))
            .map(|(_, tag)| tag.as_str())
    }

    /// Fallback tag for unknown words
    pub fn default_tag(&self) -> &str {
        &self.config.tagger.default_tag
    }

    /// Contextual rewrite rules in application order
    pub fn rules(&self) -> &[ContextRule] {
        &self.config.tagger.rules
    }

    /// Default maximum sentence length for parsing
    pub fn max_length(&self) -> usize {
        self.config.parser.max_length
    }
}

fn validate(config: &ModelConfig) -> std::result::Result<(), String> {
    if config.metadata.name.trim().is_empty() {
        return Err("metadata.name must not be empty".to_string());
    }
    if config.tagger.default_tag.trim().is_empty() {
        return Err("tagger.default_tag must not be empty".to_string());
    }
    if config.segmentation.terminators.is_empty() {
        return Err("segmentation.terminators must not be empty".to_string());
    }
    if config.parser.max_length == 0 {
        return Err("parser.max_length must be positive".to_string());
    }
    for (i, rule) in config.tagger.rules.iter().enumerate() {
        if rule.from.trim().is_empty() || rule.to.trim().is_empty() {
            return Err(format!("tagger.rules[{i}] has an empty tag"));
        }
        if rule.prev_tag.is_none() && rule.next_tag.is_none() && rule.prev_word.is_none() {
            return Err(format!("tagger.rules[{i}] has no context condition"));
        }
    }
    Ok(())
}

/// Turn a `tag -> [entries]` table into `entry -> tag`, rejecting entries
/// listed under two tags.
fn invert_table(
    table: &HashMap<String, Vec<String>>,
    section: &str,
) -> std::result::Result<HashMap<String, String>, String> {
    let mut inverted = HashMap::new();
    for (tag, entries) in table {
        for entry in entries {
            let key = entry.to_lowercase();
            if let Some(existing) = inverted.insert(key.clone(), tag.clone()) {
                if existing != *tag {
                    return Err(format!(
                        "tagger.{section}: '{entry}' is listed under both {existing} and {tag}"
                    ));
                }
            }
        }
    }
    Ok(inverted)
}
