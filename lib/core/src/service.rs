use crate::config::AlignmentPolicy;
use crate::provider::{PaperSource, SimilarityScorer};
use crate::ranking::merge_and_rank;
use crate::{CandidatePaper, Error, Result, SimilarityRequest};
use std::time::Instant;
use tracing::{debug, info};

/// Orchestrates one ranking request: search, score, merge, sort.
///
/// Holds no per-request state, so a single instance is shared by every
/// HTTP worker.
pub struct RankingService {
    source: Box<dyn PaperSource>,
    scorer: Box<dyn SimilarityScorer>,
    alignment: AlignmentPolicy,
}

impl RankingService {
    pub fn new(
        source: Box<dyn PaperSource>,
        scorer: Box<dyn SimilarityScorer>,
        alignment: AlignmentPolicy,
    ) -> Self {
        Self {
            source,
            scorer,
            alignment,
        }
    }

    /// Rank search candidates by similarity to `request.source_abstract`.
    ///
    /// # Errors
    /// - [`Error::NotFound`] when the search returns no candidates
    /// - [`Error::ScoreUnavailable`] when the scorer yields no scores
    /// - [`Error::ScoreCountMismatch`] under the strict alignment policy
    /// - whatever the source or scorer fail with
    pub async fn rank(&self, request: &SimilarityRequest) -> Result<Vec<CandidatePaper>> {
        request.validate()?;
        let start_time = Instant::now();

        let candidates = self
            .source
            .fetch_candidates(
                &request.query,
                request.max_results,
                request.sort_by,
                request.sort_order,
            )
            .await?;

        if candidates.is_empty() {
            info!("{} returned no candidates for query {:?}", self.source.name(), request.query);
            return Err(Error::NotFound);
        }
        debug!("{} returned {} candidates", self.source.name(), candidates.len());

        let sentences: Vec<&str> = candidates
            .iter()
            .map(|c| c.abstract_text.as_str())
            .collect();

        let outcome = self
            .scorer
            .score(&request.source_abstract, &sentences)
            .await?;
        debug!("{} answered {:?}", self.scorer.name(), outcome);
        let scores = outcome.into_scores().ok_or(Error::ScoreUnavailable)?;

        let ranked = merge_and_rank(candidates, &scores, self.alignment)?;

        info!(
            "Ranked {} candidates for query {:?} in {:?}",
            ranked.len(),
            request.query,
            start_time.elapsed()
        );
        Ok(ranked)
    }
}
