//! Penn Treebank style tokenization and heuristic sentence splitting
//!
//! Tokens are produced per whitespace-delimited chunk: opening brackets and
//! quotes are peeled off the front, closing punctuation off the back, and
//! what remains is checked for clitics (`n't`, `'s`, `'ll`, ...). Brackets
//! are rewritten to their `-LRB-` style names and double quotes to
//! `` `` `` / `''`.
//!
//! A sentence ends after a terminator token (plus any closing quotes or
//! brackets that directly follow it) unless the next token is a start
//! exception. Blank lines and the end of the text always end a sentence.

use crate::model::Model;
use crate::types::{Sentence, Token};
use regex::Regex;
use std::sync::OnceLock;

static INITIALS: OnceLock<Regex> = OnceLock::new();

fn initials() -> &'static Regex {
    INITIALS.get_or_init(|| Regex::new(r"^(\p{L}\.)+$").expect("initials pattern is valid"))
}

/// Tokens that may trail a terminator and still belong to its sentence
const CLOSERS: [&str; 5] = ["''", "'", "-RRB-", "-RSB-", "-RCB-"];

const SPLIT_AFTER_THREE: [&str; 5] = ["cannot", "gimme", "gonna", "lemme", "wanna"];

/// Rule-based tokenizer and sentence splitter
pub struct Tokenizer<'m> {
    model: &'m Model,
}

impl<'m> Tokenizer<'m> {
    /// Create a tokenizer using the segmentation settings of `model`
    pub fn new(model: &'m Model) -> Self {
        Self { model }
    }

    /// Split text into sentences of normalized tokens
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        for paragraph in self.paragraphs(text) {
            let tokens = self.tokenize(&paragraph);
            self.split_sentences(tokens, &mut sentences);
        }
        sentences
    }

    /// Tokenize text without sentence splitting
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut quote_open = false;
        for chunk in text.split_whitespace() {
            let chunk = chunk.replace('\u{2019}', "'");
            self.tokenize_chunk(&chunk, &mut quote_open, &mut tokens);
        }
        tokens
    }

    fn paragraphs(&self, text: &str) -> Vec<String> {
        if !self.model.paragraph_breaks() {
            return vec![text.to_string()];
        }

        let mut paragraphs = Vec::new();
        let mut current = String::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(std::mem::take(&mut current));
                }
                continue;
            }
            current.push_str(line);
            current.push('\n');
        }
        if !current.is_empty() {
            paragraphs.push(current);
        }
        paragraphs
    }

    fn split_sentences(&self, tokens: Vec<Token>, out: &mut Vec<Sentence>) {
        let mut current: Sentence = Vec::new();
        let mut iter = tokens.into_iter().peekable();

        while let Some(token) = iter.next() {
            let ends = self.model.is_terminator(&token.word);
            current.push(token);
            if !ends {
                continue;
            }

            while let Some(next) = iter.peek() {
                if !CLOSERS.contains(&next.word.as_str()) {
                    break;
                }
                if let Some(closer) = iter.next() {
                    current.push(closer);
                }
            }

            match iter.peek() {
                Some(next) if self.model.is_start_exception(&next.word) => {}
                _ => out.push(std::mem::take(&mut current)),
            }
        }

        if !current.is_empty() {
            out.push(current);
        }
    }

    fn tokenize_chunk(&self, chunk: &str, quote_open: &mut bool, out: &mut Vec<Token>) {
        // A bare double quote closes an open quotation or opens a new one
        if chunk == "\"" {
            out.push(Token::new(if *quote_open { "''" } else { "``" }));
            *quote_open = !*quote_open;
            return;
        }

        let mut rest = chunk;

        while let Some(c) = rest.chars().next() {
            let token = match c {
                '"' | '\u{201C}' => {
                    *quote_open = true;
                    "``"
                }
                '`' | '\u{2018}' => "`",
                '\'' if !is_clitic(rest) => "`",
                '(' => "-LRB-",
                '[' => "-LSB-",
                '{' => "-LCB-",
                '$' if rest.len() > 1 => "$",
                '#' if rest.len() > 1 => "#",
                _ => break,
            };
            out.push(Token::new(token));
            rest = &rest[c.len_utf8()..];
        }

        let mut trailing = Vec::new();
        while let Some(c) = rest.chars().last() {
            if rest == "..." || (rest.len() > 3 && rest.ends_with("...")) {
                trailing.push("...".to_string());
                rest = &rest[..rest.len() - 3];
                continue;
            }
            let token = match c {
                '.' => {
                    if self.keeps_period(rest) {
                        break;
                    }
                    "."
                }
                ',' => ",",
                ';' => ";",
                ':' => ":",
                '!' => "!",
                '?' => "?",
                ')' => "-RRB-",
                ']' => "-RSB-",
                '}' => "-RCB-",
                '"' | '\u{201D}' => {
                    *quote_open = false;
                    "''"
                }
                '\'' if rest.len() > 1 => "'",
                _ => break,
            };
            trailing.push(token.to_string());
            rest = &rest[..rest.len() - c.len_utf8()];
        }

        if !rest.is_empty() {
            for piece in split_clitics(rest) {
                out.push(Token::new(piece));
            }
        }
        out.extend(trailing.into_iter().rev().map(Token::new));
    }

    fn keeps_period(&self, word: &str) -> bool {
        word.len() > 1 && (self.model.is_abbreviation(word) || initials().is_match(word))
    }
}

fn is_clitic(word: &str) -> bool {
    let lower = word.to_lowercase();
    let lower = lower.trim_end_matches(|c: char| c.is_ascii_punctuation() && c != '\'');
    matches!(lower, "'s" | "'m" | "'d" | "'ll" | "'re" | "'ve")
}

/// Split contractions the way the Penn Treebank does
fn split_clitics(word: &str) -> Vec<String> {
    let lower = word.to_lowercase();

    if SPLIT_AFTER_THREE.contains(&lower.as_str()) && word.is_char_boundary(3) {
        return vec![word[..3].to_string(), word[3..].to_string()];
    }

    if let Some(apos) = word.rfind('\'') {
        let before = &word[..apos];
        let after = word[apos + 1..].to_lowercase();
        // n't attaches the n to the clitic
        if after == "t" && before.len() > 1 && before.ends_with(['n', 'N']) {
            let split = apos - 1;
            return vec![word[..split].to_string(), word[split..].to_string()];
        }
        if !before.is_empty() && matches!(after.as_str(), "s" | "m" | "d" | "ll" | "re" | "ve") {
            return vec![before.to_string(), word[apos..].to_string()];
        }
    }

    vec![word.to_string()]
}
