use std::sync::OnceLock;

use regex::Regex;

use super::{TokenizeError, TokenizedSentences, Tokenizer};

/// Default pattern-based tokenizer: tokens are maximal runs of
/// non-whitespace characters, punctuation included. Works for any
/// whitespace-delimited language and never fails.
#[derive(Debug, Default)]
pub struct GenericTokenizer;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+").expect("token pattern is valid"))
}

impl Tokenizer for GenericTokenizer {
    fn tokenize(&self, sentences: &[String]) -> Result<TokenizedSentences, TokenizeError> {
        let sentence_tokens = sentences
            .iter()
            .map(|sentence| {
                token_pattern()
                    .find_iter(sentence)
                    .map(|m| m.as_str().to_string())
                    .collect()
            })
            .collect();

        Ok(TokenizedSentences::from_tokens(sentence_tokens))
    }
}
