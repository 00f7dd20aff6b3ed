//! Per-unit line formatters
//!
//! Each formatter turns one sentence unit into exactly one line of output
//! (without the trailing newline).

use crate::types::{ParseTree, TaggedToken, Token};

const SENTENCE_OPEN: &str = "<s> ";
const SENTENCE_CLOSE: &str = " </s>";

/// Turns one analyzed unit into one output line
pub trait UnitFormatter {
    /// The unit type this formatter renders
    type Unit;

    /// Render a unit as a single line
    fn format(&self, unit: &Self::Unit) -> String;
}

/// `<s> DT NN VBD </s>`
#[derive(Debug, Default, Clone, Copy)]
pub struct TagFormatter;

impl UnitFormatter for TagFormatter {
    type Unit = Vec<TaggedToken>;

    fn format(&self, unit: &Self::Unit) -> String {
        let tags: Vec<&str> = unit.iter().map(|t| t.tag.as_str()).collect();
        format!("{SENTENCE_OPEN}{}{SENTENCE_CLOSE}", tags.join(" "))
    }
}

/// `<s> The cat sat .  </s>`
///
/// Every word is followed by a space, so the closing delimiter is preceded
/// by two spaces. Existing `.sen` consumers rely on this layout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceFormatter;

impl UnitFormatter for SentenceFormatter {
    type Unit = Vec<Token>;

    fn format(&self, unit: &Self::Unit) -> String {
        let mut line = String::from(SENTENCE_OPEN);
        for token in unit {
            line.push_str(&token.word);
            line.push(' ');
        }
        line.push_str(SENTENCE_CLOSE);
        line
    }
}

/// `(S(NP(DT)(NN))(VP(VBD))(.))`
///
/// Terminals render as nothing; only the label structure is kept.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeFormatter;

impl TreeFormatter {
    fn render_into(tree: &ParseTree, out: &mut String) {
        if tree.is_leaf() {
            return;
        }
        out.push('(');
        out.push_str(&tree.label);
        for child in &tree.children {
            Self::render_into(child, out);
        }
        out.push(')');
    }
}

impl UnitFormatter for TreeFormatter {
    type Unit = ParseTree;

    /// A childless node still renders as `(label)`; it is only skipped when
    /// reached as a child, since it is a terminal then.
    fn format(&self, unit: &Self::Unit) -> String {
        let mut out = String::new();
        out.push('(');
        out.push_str(&unit.label);
        for child in &unit.children {
            Self::render_into(child, &mut out);
        }
        out.push(')');
        out
    }
}

/// First `max_chars` characters of `line`
pub fn preview(line: &str, max_chars: usize) -> &str {
    match line.char_indices().nth(max_chars) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
