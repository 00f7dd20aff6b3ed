//! Deterministic shallow bracketing of tagged sentences
//!
//! Builds `(ROOT (S ...))` trees from POS tags alone: nominal runs become NP
//! (or ADJP when they contain no head), prepositions take a following NP to
//! form PP, verb groups absorb the phrases after them into VP. Sentences
//! longer than the length limit get the flat `(ROOT (X (X w) ...))` tree.

use crate::error::{CoreError, Result};
use crate::types::{ParseTree, TaggedToken};

const ROOT: &str = "ROOT";
const FALLBACK: &str = "X";

enum Chunk {
    Phrase(ParseTree),
    Verbs(Vec<ParseTree>),
    Word(ParseTree),
}

impl Chunk {
    fn phrase_label(&self) -> Option<&str> {
        match self {
            Chunk::Phrase(tree) => Some(&tree.label),
            _ => None,
        }
    }

    fn into_trees(self) -> Vec<ParseTree> {
        match self {
            Chunk::Phrase(tree) | Chunk::Word(tree) => vec![tree],
            Chunk::Verbs(trees) => trees,
        }
    }
}

/// Rule-based constituency bracketer
#[derive(Debug, Default, Clone, Copy)]
pub struct ShallowParser;

impl ShallowParser {
    /// Create a parser
    pub fn new() -> Self {
        Self
    }

    /// Bracket one tagged sentence
    pub fn parse(&self, tagged: &[TaggedToken], max_length: usize) -> Result<ParseTree> {
        if tagged.is_empty() {
            return Err(CoreError::capability("parse", "cannot parse an empty sentence"));
        }

        if tagged.len() > max_length {
            log::debug!(
                "Sentence of {} tokens exceeds max length {}, using flat tree",
                tagged.len(),
                max_length
            );
            let flat = tagged
                .iter()
                .map(|t| ParseTree::preterminal(FALLBACK, t.word.clone()))
                .collect();
            return Ok(ParseTree::node(
                ROOT,
                vec![ParseTree::node(FALLBACK, flat)],
            ));
        }

        let chunks = attach_prepositions(chunk(tagged));
        let clause = build_verb_phrases(chunks);
        Ok(ParseTree::node(ROOT, vec![ParseTree::node("S", clause)]))
    }
}

fn is_nominal(tag: &str) -> bool {
    matches!(
        tag,
        "DT" | "PDT" | "PRP$" | "WP$" | "CD" | "JJ" | "JJR" | "JJS" | "NN" | "NNS" | "NNP"
            | "NNPS" | "POS"
    )
}

fn is_np_marker(tag: &str) -> bool {
    matches!(
        tag,
        "DT" | "PDT" | "PRP$" | "WP$" | "CD" | "NN" | "NNS" | "NNP" | "NNPS" | "POS"
    )
}

fn is_verb(tag: &str) -> bool {
    matches!(tag, "MD" | "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ")
}

fn is_adverb(tag: &str) -> bool {
    matches!(tag, "RB" | "RBR" | "RBS")
}

fn preterminals(tagged: &[TaggedToken]) -> Vec<ParseTree> {
    tagged
        .iter()
        .map(|t| ParseTree::preterminal(t.tag.clone(), t.word.clone()))
        .collect()
}

fn chunk(tagged: &[TaggedToken]) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let n = tagged.len();
    let mut i = 0;

    while i < n {
        let tag = tagged[i].tag.as_str();

        if matches!(tag, "PRP" | "EX") {
            chunks.push(Chunk::Phrase(ParseTree::node("NP", preterminals(&tagged[i..=i]))));
            i += 1;
        } else if is_nominal(tag) {
            let mut j = i;
            while j < n && is_nominal(&tagged[j].tag) {
                j += 1;
            }
            let run = &tagged[i..j];
            let label = if run.iter().any(|t| is_np_marker(&t.tag)) {
                "NP"
            } else {
                "ADJP"
            };
            chunks.push(Chunk::Phrase(ParseTree::node(label, preterminals(run))));
            i = j;
        } else if is_verb(tag) {
            let mut j = i;
            loop {
                if j < n && is_verb(&tagged[j].tag) {
                    j += 1;
                } else if j + 1 < n
                    && j > i
                    && (is_adverb(&tagged[j].tag) || tagged[j].tag == "TO")
                    && is_verb(&tagged[j + 1].tag)
                {
                    j += 1;
                } else {
                    break;
                }
            }
            chunks.push(Chunk::Verbs(preterminals(&tagged[i..j])));
            i = j;
        } else if is_adverb(tag) {
            let mut j = i;
            while j < n && is_adverb(&tagged[j].tag) {
                j += 1;
            }
            chunks.push(Chunk::Phrase(ParseTree::node("ADVP", preterminals(&tagged[i..j]))));
            i = j;
        } else if matches!(tag, "WP" | "WDT") {
            chunks.push(Chunk::Phrase(ParseTree::node("WHNP", preterminals(&tagged[i..=i]))));
            i += 1;
        } else if tag == "WRB" {
            chunks.push(Chunk::Phrase(ParseTree::node(
                "WHADVP",
                preterminals(&tagged[i..=i]),
            )));
            i += 1;
        } else {
            chunks.extend(preterminals(&tagged[i..=i]).into_iter().map(Chunk::Word));
            i += 1;
        }
    }

    chunks
}

fn attach_prepositions(chunks: Vec<Chunk>) -> Vec<Chunk> {
    let mut out = Vec::with_capacity(chunks.len());
    let mut iter = chunks.into_iter().peekable();

    while let Some(chunk) = iter.next() {
        let is_prep = matches!(&chunk, Chunk::Word(t) if t.label == "IN" || t.label == "TO");
        if is_prep && iter.peek().and_then(Chunk::phrase_label) == Some("NP") {
            if let Some(np) = iter.next() {
                let mut children = chunk.into_trees();
                children.extend(np.into_trees());
                out.push(Chunk::Phrase(ParseTree::node("PP", children)));
                continue;
            }
        }
        out.push(chunk);
    }

    out
}

fn build_verb_phrases(chunks: Vec<Chunk>) -> Vec<ParseTree> {
    let mut out = Vec::with_capacity(chunks.len());
    let mut iter = chunks.into_iter().peekable();

    while let Some(chunk) = iter.next() {
        match chunk {
            Chunk::Verbs(mut children) => {
                while let Some(label) = iter.peek().and_then(Chunk::phrase_label) {
                    if !matches!(label, "NP" | "PP" | "ADJP" | "ADVP") {
                        break;
                    }
                    if let Some(complement) = iter.next() {
                        children.extend(complement.into_trees());
                    }
                }
                out.push(ParseTree::node("VP", children));
            }
            other => out.extend(other.into_trees()),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{TreeFormatter, UnitFormatter};

    fn tagged(pairs: &[(&str, &str)]) -> Vec<TaggedToken> {
        pairs.iter().map(|(w, t)| TaggedToken::new(*w, *t)).collect()
    }

    fn render(pairs: &[(&str, &str)], max_length: usize) -> String {
        let tree = ShallowParser::new()
            .parse(&tagged(pairs), max_length)
            .unwrap();
        assert_eq!(tree.label, "ROOT");
        TreeFormatter.format(&tree.into_first_child().unwrap())
    }

    #[test]
    fn test_simple_clause() {
        let rendered = render(
            &[("The", "DT"), ("cat", "NN"), ("sat", "VBD"), (".", ".")],
            100,
        );
        assert_eq!(rendered, "(S(NP(DT)(NN))(VP(VBD))(.))");
    }

    #[test]
    fn test_prepositional_phrase_inside_vp() {
        let rendered = render(
            &[
                ("The", "DT"),
                ("cat", "NN"),
                ("sat", "VBD"),
                ("on", "IN"),
                ("the", "DT"),
                ("mat", "NN"),
                (".", "."),
            ],
            100,
        );
        assert_eq!(rendered, "(S(NP(DT)(NN))(VP(VBD)(PP(IN)(NP(DT)(NN))))(.))");
    }

    #[test]
    fn test_verb_group_with_negation() {
        let rendered = render(
            &[("I", "PRP"), ("do", "VBP"), ("n't", "RB"), ("know", "VB")],
            100,
        );
        assert_eq!(rendered, "(S(NP(PRP))(VP(VBP)(RB)(VB)))");
    }

    #[test]
    fn test_adjective_run_is_adjp() {
        let rendered = render(&[("It", "PRP"), ("is", "VBZ"), ("big", "JJ")], 100);
        assert_eq!(rendered, "(S(NP(PRP))(VP(VBZ)(ADJP(JJ))))");
    }

    #[test]
    fn test_over_length_sentence_is_flat() {
        let rendered = render(&[("a", "DT"), ("b", "NN"), ("c", "VBD")], 2);
        assert_eq!(rendered, "(X(X)(X)(X))");
    }

    #[test]
    fn test_leaf_count_preserved() {
        let words = tagged(&[
            ("When", "WRB"),
            ("did", "VBD"),
            ("you", "PRP"),
            ("go", "VB"),
            ("?", "."),
        ]);
        let tree = ShallowParser::new().parse(&words, 100).unwrap();
        assert_eq!(tree.leaf_count(), words.len());
        assert_eq!(tree.preterminals(), vec!["WRB", "VBD", "PRP", "VB", "."]);
    }

    #[test]
    fn test_empty_sentence_is_capability_error() {
        let err = ShallowParser::new().parse(&[], 100).unwrap_err();
        assert!(matches!(err, CoreError::Capability { stage: "parse", .. }));
    }
}
