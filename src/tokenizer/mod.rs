mod dictionary;
mod generic;


pub use dictionary::{DictionaryTokenizer, Lexicon};
pub use generic::GenericTokenizer;

use std::collections::HashSet;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenizeError {
    #[error("dictionary lexicon unavailable: {0}")]
    LexiconUnavailable(String),
}

/// Ordered token lists plus the document vocabulary they draw from.
#[derive(Debug, Clone)]
pub struct TokenizedSentences {
    /// Distinct tokens in order of first appearance across the document.
    pub vocabulary: Vec<String>,
    /// Tokens per input sentence, in sentence order.
    pub sentence_tokens: Vec<Vec<String>>,
}

impl TokenizedSentences {
    /// Build from per-sentence token lists, deriving the vocabulary in
    /// order of first appearance.
    pub fn from_tokens(sentence_tokens: Vec<Vec<String>>) -> Self {
        let mut vocabulary = Vec::new();
        let mut seen = HashSet::new();
        for tokens in &sentence_tokens {
            for token in tokens {
                if seen.insert(token.clone()) {
                    vocabulary.push(token.clone());
                }
            }
        }
        Self {
            vocabulary,
            sentence_tokens,
        }
    }
}

/// Core trait all tokenizers implement
pub trait Tokenizer: Send + Sync {
    /// Tokenize every sentence of one document.
    ///
    /// # Arguments
    /// * `sentences` - Cleaned sentence strings in document order
    ///
    /// # Returns
    /// The document vocabulary and one ordered token list per sentence.
    /// Joining a sentence's tokens reproduces its content with the
    /// whitespace removed.
    fn tokenize(&self, sentences: &[String]) -> Result<TokenizedSentences, TokenizeError>;
}
