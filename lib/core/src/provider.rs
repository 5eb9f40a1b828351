//! Seams to the two remote services a ranking request depends on.
//!
//! The HTTP clients live in their own crates; the ranking service only sees
//! these traits, which keeps it testable with in-process substitutes.

use crate::{CandidatePaper, Result, SortBy, SortOrder};
use async_trait::async_trait;

/// Source of candidate papers for a free-text query.
#[async_trait]
pub trait PaperSource: Send + Sync {
    /// Fetch at most `max_results` candidates, in the order the source
    /// returns them. An empty result is not an error.
    async fn fetch_candidates(
        &self,
        query: &str,
        max_results: u32,
        sort_by: SortBy,
        sort_order: SortOrder,
    ) -> Result<Vec<CandidatePaper>>;

    /// Name used in log lines.
    fn name(&self) -> &str;
}

/// Result of a scoring call that reached the remote service.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreOutcome {
    /// Scores in submission order, exactly as returned.
    Scored(Vec<f64>),
    /// The service answered with a non-success status.
    Unavailable { status: u16 },
}

impl ScoreOutcome {
    /// Scores if there are any to merge.
    pub fn into_scores(self) -> Option<Vec<f64>> {
        match self {
            ScoreOutcome::Scored(scores) if !scores.is_empty() => Some(scores),
            _ => None,
        }
    }
}

/// Sentence-similarity service scoring candidates against a reference.
#[async_trait]
pub trait SimilarityScorer: Send + Sync {
    /// Score every sentence against `reference` in a single call.
    /// `score[i]` must refer to `sentences[i]`; callers check the length.
    async fn score(&self, reference: &str, sentences: &[&str]) -> Result<ScoreOutcome>;

    fn name(&self) -> &str;
}
