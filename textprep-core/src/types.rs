//! Core data types shared by the backend, formatters and pipeline

use serde::Serialize;
use std::fmt;

/// A single token after tokenization and normalization
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Normalized surface text
    pub word: String,
}

impl Token {
    /// Create a token from its surface text
    pub fn new<S: Into<String>>(word: S) -> Self {
        Self { word: word.into() }
    }
}

impl From<&str> for Token {
    fn from(word: &str) -> Self {
        Token::new(word)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.word)
    }
}

/// A sentence is an ordered sequence of tokens
pub type Sentence = Vec<Token>;

/// A token paired with its part-of-speech label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// Surface text
    pub word: String,
    /// Part-of-speech label (Penn Treebank tag set for the built-in model)
    pub tag: String,
}

impl TaggedToken {
    /// Create a tagged token
    pub fn new<W: Into<String>, T: Into<String>>(word: W, tag: T) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

/// Labeled tree node with ordered children
///
/// Leaves carry the terminal word as their label and have no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTree {
    /// Node label (phrase category, POS tag, or word for leaves)
    pub label: String,
    /// Ordered children
    pub children: Vec<ParseTree>,
}

impl ParseTree {
    /// Create a terminal node
    pub fn leaf<S: Into<String>>(word: S) -> Self {
        Self {
            label: word.into(),
            children: Vec::new(),
        }
    }

    /// Create an internal node
    pub fn node<S: Into<String>>(label: S, children: Vec<ParseTree>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    /// Create a preterminal `(tag word)` node
    pub fn preterminal<T: Into<String>, W: Into<String>>(tag: T, word: W) -> Self {
        Self::node(tag, vec![Self::leaf(word)])
    }

    /// Whether this node is a terminal
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this node directly dominates a single terminal
    pub fn is_preterminal(&self) -> bool {
        self.children.len() == 1 && self.children[0].is_leaf()
    }

    /// First child, if any
    pub fn first_child(&self) -> Option<&ParseTree> {
        self.children.first()
    }

    /// Consume the node and return its first child, if any
    pub fn into_first_child(self) -> Option<ParseTree> {
        self.children.into_iter().next()
    }

    /// Number of terminals below this node
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(ParseTree::leaf_count).sum()
        }
    }

    /// Preterminal labels in left-to-right order
    pub fn preterminals(&self) -> Vec<&str> {
        let mut tags = Vec::new();
        self.collect_preterminals(&mut tags);
        tags
    }

    fn collect_preterminals<'a>(&'a self, out: &mut Vec<&'a str>) {
        if self.is_preterminal() {
            out.push(&self.label);
            return;
        }
        for child in &self.children {
            child.collect_preterminals(out);
        }
    }
}

/// The three preprocessing tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    /// Part-of-speech tagging, one tag sequence per sentence
    Tag,
    /// Sentence segmentation, one tokenized sentence per line
    Segment,
    /// Constituency parsing, one bracketed tree per sentence
    Parse,
}

impl Task {
    /// All tasks in display order
    pub const ALL: [Task; 3] = [Task::Tag, Task::Segment, Task::Parse];

    /// Suffix appended to the input path to name the artifact
    pub fn suffix(&self) -> &'static str {
        match self {
            Task::Tag => "pos",
            Task::Segment => "sen",
            Task::Parse => "tree",
        }
    }

    /// Short name
    pub fn name(&self) -> &'static str {
        match self {
            Task::Tag => "tag",
            Task::Segment => "segment",
            Task::Parse => "parse",
        }
    }

    /// Progressive verb used in progress messages
    pub fn verb(&self) -> &'static str {
        match self {
            Task::Tag => "Tagging",
            Task::Segment => "Segmenting",
            Task::Parse => "Parsing",
        }
    }

    /// Whether output lines are wrapped in `<s> ... </s>`
    pub fn is_delimited(&self) -> bool {
        !matches!(self, Task::Parse)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
