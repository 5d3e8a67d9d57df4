use std::ops::Range;

use thiserror::Error;

use super::{cosine_similarity, ChunkingConfig};

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("sentence/vector count mismatch: {sentences} sentences, {vectors} vectors")]
    CountMismatch { sentences: usize, vectors: usize },
}

/// Group sentences into chunks according to the rules:
/// - Split where cosine similarity to the previous sentence drops below
///   the threshold, at Markdown headings, or when the chunk is full
/// - A chunk below `min_chunk_size` code points vetoes those signals
///   and keeps absorbing sentences
/// - A chunk at `2 * max_chunk_size` sentences splits unconditionally,
///   so the veto can never grow a chunk without bound
///
/// One greedy left-to-right pass, no backtracking. Returns the rendered
/// chunk per group; groups partition the sentence list in order.
pub fn assemble(
    sentences: &[String],
    vectors: &[Vec<f32>],
    config: &ChunkingConfig,
) -> Result<Vec<String>, AssembleError> {
    let config = config.normalized();
    let groups = assemble_indices(sentences, vectors, &config)?;

    Ok(groups
        .into_iter()
        .map(|range| render_chunk(&sentences[range], &config))
        .collect())
}

/// Like [`assemble`], but returns each chunk's sentence-index range
/// instead of rendered text. Useful for verifying split decisions.
pub fn assemble_indices(
    sentences: &[String],
    vectors: &[Vec<f32>],
    config: &ChunkingConfig,
) -> Result<Vec<Range<usize>>, AssembleError> {
    if sentences.len() != vectors.len() {
        return Err(AssembleError::CountMismatch {
            sentences: sentences.len(),
            vectors: vectors.len(),
        });
    }
    if sentences.is_empty() {
        return Ok(vec![]);
    }
    if sentences.len() == 1 {
        // Sole sentence, nothing to compare against
        return Ok(vec![0..1]);
    }

    let config = config.normalized();
    let separator_chars = config.separator().chars().count();

    let mut groups = Vec::new();
    let mut start = 0;
    let mut char_len = sentences[0].chars().count();

    for i in 1..sentences.len() {
        let count = i - start;
        let sim = cosine_similarity(&vectors[i - 1], &vectors[i]);
        let is_header = sentences[i].trim_start().starts_with('#');

        let should_split =
            is_header || sim < config.similarity_threshold || count >= config.max_chunk_size;
        let can_split = char_len >= config.min_chunk_size;
        let force_split = count >= 2 * config.max_chunk_size;

        if (should_split && can_split) || force_split {
            groups.push(start..i);
            start = i;
            char_len = sentences[i].chars().count();
        } else {
            char_len += separator_chars + sentences[i].chars().count();
        }
    }

    // The remainder is never discarded, even below min_chunk_size
    groups.push(start..sentences.len());

    Ok(groups)
}

/// Render a run of sentences into one single-line chunk string: join
/// with the configured separator, then either strip all whitespace or
/// flatten embedded line breaks to spaces.
pub fn render_chunk(sentences: &[String], config: &ChunkingConfig) -> String {
    let joined = sentences.join(config.separator());
    if config.remove_whitespace {
        joined.chars().filter(|c| !c.is_whitespace()).collect()
    } else {
        joined.replace(['\n', '\r'], " ")
    }
}
