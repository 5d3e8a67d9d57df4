// Public API exports
pub mod chunker;
pub mod pipeline;
pub mod segmenter;
pub mod tokenizer;
pub mod vectorizer;

// Re-export main types for convenience
pub use chunker::{
    assemble, assemble_indices, cosine_similarity, render_chunk, AssembleError, ChunkingConfig,
    DEFAULT_MAX_CHUNK_SIZE, DEFAULT_MIN_CHUNK_SIZE, DEFAULT_SIMILARITY_THRESHOLD,
};

pub use pipeline::{split_text, Document, IdStrategy, SemanticSplitter};

pub use segmenter::{clean_text, segment};

pub use tokenizer::{
    DictionaryTokenizer, GenericTokenizer, Lexicon, TokenizeError, TokenizedSentences, Tokenizer,
};

pub use vectorizer::{vectorize, SentenceVectors};
