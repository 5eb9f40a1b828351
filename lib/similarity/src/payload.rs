//! Wire format of the sentence-similarity task
//!
//! Request: `{"inputs": {"source_sentence": "...", "sentences": ["...", ...]}}`
//! Response: `[0.71, 0.12, ...]`, one score per sentence, same order.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SimilarityScorePayload<'a> {
    pub inputs: SimilarityInputs<'a>,
}

#[derive(Debug, Serialize)]
pub struct SimilarityInputs<'a> {
    pub source_sentence: &'a str,
    pub sentences: &'a [&'a str],
}

impl<'a> SimilarityScorePayload<'a> {
    pub fn new(source_sentence: &'a str, sentences: &'a [&'a str]) -> Self {
        Self {
            inputs: SimilarityInputs {
                source_sentence,
                sentences,
            },
        }
    }
}

/// Scores as returned by the service, positionally aligned with `sentences`.
pub type SimilarityScores = Vec<f64>;
