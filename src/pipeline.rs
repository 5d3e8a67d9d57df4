use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::chunker::{assemble, render_chunk, ChunkingConfig};
use crate::segmenter::segment;
use crate::tokenizer::{DictionaryTokenizer, GenericTokenizer, Lexicon, TokenizeError};
use crate::vectorizer::vectorize;

/// A document record flowing through a host pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Host-assigned identifier
    pub id: String,
    /// Raw text content
    pub content: String,
    /// Opaque host metadata, duplicated onto every chunk record
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// How chunk records derive their ids from the source document.
pub enum IdStrategy {
    /// Reuse the source document id for every chunk (default).
    Inherit,
    /// Fresh random v4 uuid per chunk.
    Uuid,
    /// Hex-encoded sha256 over the source id and chunk index;
    /// deterministic across runs.
    ContentHash,
    /// Arbitrary pure function of `(source_id, chunk_index)`.
    Custom(Box<dyn Fn(&str, usize) -> String + Send + Sync>),
}

impl IdStrategy {
    fn generate(&self, original: &str, index: usize) -> String {
        match self {
            IdStrategy::Inherit => original.to_string(),
            IdStrategy::Uuid => Uuid::new_v4().to_string(),
            IdStrategy::ContentHash => {
                let mut hasher = Sha256::new();
                hasher.update(original.as_bytes());
                hasher.update(index.to_be_bytes());
                hex::encode(hasher.finalize())
            }
            IdStrategy::Custom(generate) => generate(original, index),
        }
    }
}

/// Drives the pipeline for one text at a time:
/// segmenter → vectorizer → chunk assembly.
///
/// Stateless between calls; vocabulary and vectors are scoped to each
/// `split` invocation, so one splitter may serve concurrent callers.
pub struct SemanticSplitter {
    config: ChunkingConfig,
    lexicon: Option<Lexicon>,
    id_strategy: IdStrategy,
}

impl SemanticSplitter {
    /// Create a splitter. Invalid numeric config fields are replaced
    /// with their defaults rather than rejected.
    pub fn new(config: ChunkingConfig) -> Self {
        Self {
            config: config.normalized(),
            lexicon: None,
            id_strategy: IdStrategy::Inherit,
        }
    }

    /// Inject the word list the dictionary tokenizer segments with.
    /// Only consulted when the config selects the dictionary tokenizer.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Choose how chunk record ids are generated.
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    /// Split one text into ordered chunk strings.
    ///
    /// If tokenization fails (e.g. the dictionary tokenizer was selected
    /// without a usable lexicon), degrades to one sentence per chunk
    /// instead of erroring. Empty input yields an empty list.
    pub fn split(&self, text: &str) -> Result<Vec<String>> {
        let sentences = segment(text);
        if sentences.is_empty() {
            return Ok(vec![]);
        }
        debug!(sentences = sentences.len(), "segmented input");

        if sentences.len() == 1 {
            return Ok(vec![render_chunk(&sentences, &self.config)]);
        }

        let vectors = match self.vectorize_sentences(&sentences) {
            Ok(vectors) => vectors,
            Err(err) => {
                warn!(error = %err, "tokenization failed, falling back to one sentence per chunk");
                return Ok(sentences
                    .iter()
                    .map(|sentence| render_chunk(std::slice::from_ref(sentence), &self.config))
                    .collect());
            }
        };

        let chunks = assemble(&sentences, &vectors, &self.config)
            .context("chunk assembly rejected its input")?;
        debug!(chunks = chunks.len(), "assembled chunks");

        Ok(chunks)
    }

    /// Split a document record into one record per chunk. Each record
    /// carries a generated id, the chunk text, and a copy of the source
    /// metadata map; record order follows document order.
    pub fn split_document(&self, document: &Document) -> Result<Vec<Document>> {
        let chunks = self
            .split(&document.content)
            .with_context(|| format!("splitting document {}", document.id))?;

        Ok(chunks
            .into_iter()
            .enumerate()
            .map(|(index, content)| Document {
                id: self.id_strategy.generate(&document.id, index),
                content,
                metadata: document.metadata.clone(),
            })
            .collect())
    }

    fn vectorize_sentences(&self, sentences: &[String]) -> Result<Vec<Vec<f32>>, TokenizeError> {
        let vectors = if self.config.use_dict_tokenizer {
            let lexicon = self.lexicon.clone().ok_or_else(|| {
                TokenizeError::LexiconUnavailable("no lexicon injected".to_string())
            })?;
            vectorize(sentences, &DictionaryTokenizer::new(lexicon))?
        } else {
            vectorize(sentences, &GenericTokenizer)?
        };

        Ok(vectors.vectors)
    }
}

impl std::fmt::Debug for SemanticSplitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticSplitter")
            .field("config", &self.config)
            .field("lexicon", &self.lexicon.as_ref().map(Lexicon::len))
            .finish()
    }
}

/// One-shot convenience: split `text` with `config` and the default
/// tokenizer selection.
pub fn split_text(text: &str, config: &ChunkingConfig) -> Result<Vec<String>> {
    SemanticSplitter::new(config.clone()).split(text)
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    fn make_document(id: &str, content: &str) -> Document {
        let mut metadata = HashMap::new();
        metadata.insert("source".to_string(), serde_json::json!("unit-test"));
        Document {
            id: id.to_string(),
            content: content.to_string(),
            metadata,
        }
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let chunks = split_text("", &ChunkingConfig::default()).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_single_sentence_yields_single_chunk() {
        let chunks = split_text("no terminator here", &ChunkingConfig::default()).unwrap();
        assert_eq!(chunks, vec!["no terminator here"]);
    }

    #[test]
    fn test_heading_becomes_its_own_chunk() {
        // Heading and body share no tokens, so their similarity is 0
        // and the default threshold splits right after the heading.
        let chunks = split_text("# Intro\nSome text here.", &ChunkingConfig::default()).unwrap();
        assert_eq!(chunks, vec!["# Intro", "Some text here."]);
    }

    #[test]
    fn test_repeated_topic_stays_in_one_chunk() {
        // Heavy token overlap keeps adjacent similarity above threshold
        let text = "alpha beta gamma. alpha beta gamma. alpha beta gamma.";
        let chunks = split_text(text, &ChunkingConfig::default()).unwrap();
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_remove_whitespace_strips_every_space() {
        let config = ChunkingConfig {
            remove_whitespace: true,
            ..ChunkingConfig::default()
        };
        let chunks = split_text("Hello world. Bye.", &config).unwrap();

        for chunk in &chunks {
            assert!(!chunk.chars().any(char::is_whitespace), "chunk: {chunk:?}");
        }
    }

    #[test]
    fn test_missing_lexicon_falls_back_to_sentence_chunks() {
        let config = ChunkingConfig {
            use_dict_tokenizer: true,
            ..ChunkingConfig::default()
        };
        let splitter = SemanticSplitter::new(config);

        let chunks = splitter.split("One sentence. Two sentences. Three.").unwrap();

        assert_eq!(chunks, vec!["One sentence.", "Two sentences.", "Three."]);
    }

    #[test]
    fn test_dictionary_tokenizer_end_to_end() {
        let config = ChunkingConfig {
            use_dict_tokenizer: true,
            ..ChunkingConfig::default()
        };
        let splitter = SemanticSplitter::new(config)
            .with_lexicon(Lexicon::from_words(["今天", "天气", "不错"]));

        let chunks = splitter.split("今天天气不错。今天天气不错。").unwrap();

        // Identical sentences, maximal similarity: one merged chunk
        assert_eq!(chunks, vec!["今天天气不错。 今天天气不错。"]);
    }

    #[test]
    fn test_split_document_duplicates_metadata() {
        let splitter = SemanticSplitter::new(ChunkingConfig::default());
        let document = make_document("doc-1", "# One\nBody text here.");

        let records = splitter.split_document(&document).unwrap();

        assert!(records.len() > 1);
        for record in &records {
            assert_eq!(record.id, "doc-1");
            assert_eq!(record.metadata, document.metadata);
        }
    }

    #[test]
    fn test_content_hash_ids_are_deterministic_and_distinct() {
        let make_splitter = || {
            SemanticSplitter::new(ChunkingConfig::default())
                .with_id_strategy(IdStrategy::ContentHash)
        };
        let document = make_document("doc-2", "# One\nBody text here.");

        let first = make_splitter().split_document(&document).unwrap();
        let second = make_splitter().split_document(&document).unwrap();

        let first_ids: Vec<_> = first.iter().map(|r| r.id.clone()).collect();
        let second_ids: Vec<_> = second.iter().map(|r| r.id.clone()).collect();
        assert_eq!(first_ids, second_ids);
        assert_ne!(first_ids[0], first_ids[1]);
    }

    #[test]
    fn test_custom_id_strategy() {
        let splitter = SemanticSplitter::new(ChunkingConfig::default()).with_id_strategy(
            IdStrategy::Custom(Box::new(|id, index| format!("{id}::{index}"))),
        );
        let document = make_document("doc-3", "# One\nBody text here.");

        let records = splitter.split_document(&document).unwrap();

        assert_eq!(records[0].id, "doc-3::0");
        assert_eq!(records[1].id, "doc-3::1");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let splitter =
            SemanticSplitter::new(ChunkingConfig::default()).with_id_strategy(IdStrategy::Uuid);
        let document = make_document("doc-4", "# One\nBody text here.");

        let records = splitter.split_document(&document).unwrap();

        assert_ne!(records[0].id, records[1].id);
        assert_ne!(records[0].id, "doc-4");
    }

    #[test]
    fn test_invalid_config_is_corrected_not_rejected() {
        let config = ChunkingConfig {
            similarity_threshold: -1.0,
            max_chunk_size: 0,
            ..ChunkingConfig::default()
        };

        let chunks = split_text("Still works. Despite the config.", &config).unwrap();

        assert!(!chunks.is_empty());
    }
}
