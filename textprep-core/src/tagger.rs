//! Lexicon and suffix based part-of-speech tagger

use crate::model::{ContextRule, Model};
use crate::types::{TaggedToken, Token};
use regex::Regex;
use std::sync::OnceLock;

static NUMBER: OnceLock<Regex> = OnceLock::new();

fn number() -> &'static Regex {
    NUMBER.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+([.,:/]\d+)*|\.\d+)(%|s|th|st|nd|rd)?$")
            .expect("number pattern is valid")
    })
}

/// Tags tokens from a model's lexicon, suffix table and contextual rules
pub struct LexiconTagger<'m> {
    model: &'m Model,
}

impl<'m> LexiconTagger<'m> {
    /// Create a tagger backed by `model`
    pub fn new(model: &'m Model) -> Self {
        Self { model }
    }

    /// Tag one sentence, one tag per token
    pub fn tag(&self, tokens: &[Token]) -> Vec<TaggedToken> {
        let mut tags: Vec<String> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| self.initial_tag(&token.word, i == 0).to_string())
            .collect();

        self.apply_rules(tokens, &mut tags);

        tokens
            .iter()
            .zip(tags)
            .map(|(token, tag)| TaggedToken::new(token.word.clone(), tag))
            .collect()
    }

    fn initial_tag(&self, word: &str, sentence_initial: bool) -> &str {
        let lower = word.to_lowercase();
        if let Some(tag) = self.model.lexicon_tag(&lower) {
            return tag;
        }
        if number().is_match(word) {
            return "CD";
        }

        let capitalized = word.chars().next().is_some_and(char::is_uppercase);
        if capitalized && !sentence_initial {
            return "NNP";
        }
        if word.contains('-') && word.chars().any(char::is_alphabetic) {
            return "JJ";
        }
        if let Some(tag) = self.model.suffix_tag(&lower) {
            return tag;
        }
        if capitalized {
            return "NNP";
        }
        self.model.default_tag()
    }

    fn apply_rules(&self, tokens: &[Token], tags: &mut [String]) {
        let rules = self.model.rules();
        if rules.is_empty() {
            return;
        }

        for i in 0..tags.len() {
            let prev_tag = if i > 0 { Some(tags[i - 1].as_str()) } else { None };
            let next_tag = tags.get(i + 1).map(String::as_str);
            let prev_word = if i > 0 {
                Some(tokens[i - 1].word.to_lowercase())
            } else {
                None
            };

            let rewrite = rules
                .iter()
                .find(|rule| {
                    rule.from == tags[i]
                        && matches_condition(&rule.prev_tag, prev_tag)
                        && matches_condition(&rule.next_tag, next_tag)
                        && matches_condition(&rule.prev_word, prev_word.as_deref())
                })
                .map(|rule: &ContextRule| rule.to.clone());

            if let Some(tag) = rewrite {
                log::trace!("rule rewrite {} -> {} at {}", tags[i], tag, tokens[i].word);
                tags[i] = tag;
            }
        }
    }
}

fn matches_condition(expected: &Option<String>, actual: Option<&str>) -> bool {
    match expected {
        None => true,
        Some(expected) => actual == Some(expected.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_words(words: &[&str]) -> Vec<String> {
        let model = Model::english().unwrap();
        let tokens: Vec<Token> = words.iter().map(|w| Token::from(*w)).collect();
        LexiconTagger::new(&model)
            .tag(&tokens)
            .into_iter()
            .map(|t| t.tag)
            .collect()
    }

    #[test]
    fn test_the_cat_sat() {
        assert_eq!(tag_words(&["The", "cat", "sat", "."]), vec!["DT", "NN", "VBD", "."]);
    }

    #[test]
    fn test_one_tag_per_token() {
        let words = ["Dr.", "Smith", "went", "to", "the", "store", "."];
        let tags = tag_words(&words);
        assert_eq!(tags.len(), words.len());
        assert_eq!(tags[1], "NNP");
        assert_eq!(tags[4], "DT");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tag_words(&["about", "3.5", "percent"])[1], "CD");
        assert_eq!(tag_words(&["in", "1990s"])[1], "CD");
        assert_eq!(tag_words(&["seven"])[0], "CD");
    }

    #[test]
    fn test_suffixes() {
        let tags = tag_words(&["they", "quickly", "walked", "jumping", "dogs"]);
        assert_eq!(tags[1], "RB");
        assert_eq!(tags[2], "VBD");
        assert_eq!(tags[3], "VBG");
        assert_eq!(tags[4], "NNS");
    }

    #[test]
    fn test_unknown_word_gets_default_tag() {
        assert_eq!(tag_words(&["the", "blorft"])[1], "NN");
    }

    #[test]
    fn test_hyphenated_word() {
        assert_eq!(tag_words(&["a", "well-known", "fact"])[1], "JJ");
    }

    #[test]
    fn test_context_rule_to_verb() {
        let tags = tag_words(&["I", "want", "to", "work"]);
        assert_eq!(tags[2], "TO");
        assert_eq!(tags[3], "VB");
    }

    #[test]
    fn test_context_rule_clitic_is_verb_after_pronoun() {
        let tags = tag_words(&["it", "'s", "John", "'s"]);
        assert_eq!(tags[1], "VBZ");
        assert_eq!(tags[3], "POS");
    }

    #[test]
    fn test_context_rule_prev_word() {
        let tags = tag_words(&["I", "do", "n't", "have"]);
        assert_eq!(tags[2], "RB");
        assert_eq!(tags[3], "VB");
    }

    #[test]
    fn test_empty_sentence() {
        assert!(tag_words(&[]).is_empty());
    }
}
