use std::collections::HashSet;

use super::{TokenizeError, TokenizedSentences, Tokenizer};

/// Word list driving dictionary-based segmentation. Hosts load it from
/// whatever resource they own; the tokenizer never touches the
/// filesystem itself.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
    /// Longest entry in Unicode code points, bounds the match window.
    max_word_chars: usize,
}

impl Lexicon {
    /// Build from any collection of words. Entries are trimmed; empty
    /// ones are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        let mut max_word_chars = 0;
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            max_word_chars = max_word_chars.max(word.chars().count());
            set.insert(word.to_string());
        }
        Self {
            words: set,
            max_word_chars,
        }
    }

    /// Parse a newline-delimited word list; blank lines and `#` comment
    /// lines are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Dictionary-based word segmentation for languages without
/// whitespace-delimited words. Forward maximum matching: at each
/// position the longest lexicon entry wins, with a single-character
/// fallback, so every visible character ends up in exactly one token.
#[derive(Debug, Clone)]
pub struct DictionaryTokenizer {
    lexicon: Lexicon,
}

impl DictionaryTokenizer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    fn segment_words(&self, sentence: &str) -> Vec<String> {
        let chars: Vec<char> = sentence.chars().collect();
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            if chars[pos].is_whitespace() {
                pos += 1;
                continue;
            }

            let window = self.lexicon.max_word_chars.min(chars.len() - pos);
            let mut matched: Option<String> = None;
            for len in (2..=window).rev() {
                let candidate: String = chars[pos..pos + len].iter().collect();
                // Words never span a separator
                if candidate.chars().any(char::is_whitespace) {
                    continue;
                }
                if self.lexicon.contains(&candidate) {
                    matched = Some(candidate);
                    break;
                }
            }

            match matched {
                Some(word) => {
                    pos += word.chars().count();
                    tokens.push(word);
                }
                None => {
                    tokens.push(chars[pos].to_string());
                    pos += 1;
                }
            }
        }

        tokens
    }
}

impl Tokenizer for DictionaryTokenizer {
    fn tokenize(&self, sentences: &[String]) -> Result<TokenizedSentences, TokenizeError> {
        if self.lexicon.is_empty() {
            return Err(TokenizeError::LexiconUnavailable(
                "lexicon has no entries".to_string(),
            ));
        }

        let sentence_tokens = sentences
            .iter()
            .map(|sentence| self.segment_words(sentence))
            .collect();

        Ok(TokenizedSentences::from_tokens(sentence_tokens))
    }
}
