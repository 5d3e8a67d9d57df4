use std::collections::HashMap;

use crate::tokenizer::{TokenizeError, Tokenizer};

/// TF-IDF vectors for one document's sentences. Scoped to a single
/// document; nothing here is shared across calls.
#[derive(Debug, Clone)]
pub struct SentenceVectors {
    /// Distinct tokens in first-appearance order; index `i` of every
    /// vector weighs `vocabulary[i]`.
    pub vocabulary: Vec<String>,
    /// One vector per input sentence, dimensionality `vocabulary.len()`.
    pub vectors: Vec<Vec<f32>>,
}

/// Compute TF-IDF sentence vectors, treating each sentence as a
/// pseudo-document.
///
/// Term frequency is the raw in-sentence count. Inverse document
/// frequency is smoothed as `ln((1 + N) / (1 + df)) + 1`, which stays
/// positive and defined even for terms present in every sentence.
///
/// Fails only if the tokenizer does; no partial vectors are produced.
pub fn vectorize(
    sentences: &[String],
    tokenizer: &dyn Tokenizer,
) -> Result<SentenceVectors, TokenizeError> {
    let tokenized = tokenizer.tokenize(sentences)?;
    let vocabulary = tokenized.vocabulary;

    let term_index: HashMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(i, term)| (term.as_str(), i))
        .collect();

    // Raw term counts per sentence
    let mut counts: Vec<Vec<f32>> = Vec::with_capacity(tokenized.sentence_tokens.len());
    for tokens in &tokenized.sentence_tokens {
        let mut row = vec![0.0f32; vocabulary.len()];
        for token in tokens {
            if let Some(&i) = term_index.get(token.as_str()) {
                row[i] += 1.0;
            }
        }
        counts.push(row);
    }

    // Smoothed inverse document frequency per term
    let sentence_count = counts.len() as f32;
    let mut idf = vec![0.0f32; vocabulary.len()];
    for (i, weight) in idf.iter_mut().enumerate() {
        let df = counts.iter().filter(|row| row[i] > 0.0).count() as f32;
        *weight = ((1.0 + sentence_count) / (1.0 + df)).ln() + 1.0;
    }

    let vectors = counts
        .into_iter()
        .map(|row| row.iter().zip(&idf).map(|(tf, w)| tf * w).collect())
        .collect();

    Ok(SentenceVectors {
        vocabulary,
        vectors,
    })
}
