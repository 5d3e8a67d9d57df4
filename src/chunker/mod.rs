mod assembler;
mod similarity;


pub use assembler::{assemble, assemble_indices, render_chunk, AssembleError};
pub use similarity::cosine_similarity;

/// Default cosine similarity below which adjacent sentences split.
pub const DEFAULT_SIMILARITY_THRESHOLD: f32 = 0.2;

/// Default maximum sentences per chunk.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 10;

/// Default minimum chunk length in Unicode code points (no minimum).
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 0;

/// Per-call chunking configuration. There is no hidden global state;
/// every call is fully parameterized by one of these.
#[derive(Debug, Clone)]
pub struct ChunkingConfig {
    /// Cosine similarity below which adjacent sentences signal a split,
    /// conceptually in (0, 1].
    pub similarity_threshold: f32,
    /// Sentences per chunk before a split is signalled.
    pub max_chunk_size: usize,
    /// Chunk length in Unicode code points below which split signals
    /// are vetoed.
    pub min_chunk_size: usize,
    /// Strip every whitespace character from rendered chunks.
    pub remove_whitespace: bool,
    /// Use the dictionary word-segmentation tokenizer instead of the
    /// default pattern tokenizer.
    pub use_dict_tokenizer: bool,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            min_chunk_size: DEFAULT_MIN_CHUNK_SIZE,
            remove_whitespace: false,
            use_dict_tokenizer: false,
        }
    }
}

impl ChunkingConfig {
    /// Replace obviously invalid numeric fields with their defaults
    /// instead of rejecting the call. A non-positive (or NaN) threshold
    /// and a zero max size both fall back.
    pub fn normalized(&self) -> Self {
        let mut config = self.clone();
        if !(config.similarity_threshold > 0.0) {
            config.similarity_threshold = DEFAULT_SIMILARITY_THRESHOLD;
        }
        if config.max_chunk_size == 0 {
            config.max_chunk_size = DEFAULT_MAX_CHUNK_SIZE;
        }
        config
    }

    /// Join separator between sentences of a rendered chunk.
    pub fn separator(&self) -> &'static str {
        if self.remove_whitespace {
            ""
        } else {
            " "
        }
    }
}
