//! Score merging and ordering
//!
//! Attaches externally computed similarity scores to candidates by position
//! and orders the result by score.

use crate::config::AlignmentPolicy;
use crate::{CandidatePaper, Error, Result};
use std::cmp::Ordering;
use tracing::warn;

/// Attach `scores[i]` to `candidates[i]`.
///
/// With [`AlignmentPolicy::Truncate`] only the overlapping prefix is paired.
/// With [`AlignmentPolicy::Strict`] a length mismatch is an error and no
/// candidate is touched.
pub fn merge_scores(
    candidates: &mut [CandidatePaper],
    scores: &[f64],
    policy: AlignmentPolicy,
) -> Result<()> {
    if candidates.len() != scores.len() {
        match policy {
            AlignmentPolicy::Strict => {
                return Err(Error::ScoreCountMismatch {
                    expected: candidates.len(),
                    actual: scores.len(),
                });
            }
            AlignmentPolicy::Truncate => {
                warn!(
                    "Score count mismatch: {} candidates, {} scores; pairing the first {}",
                    candidates.len(),
                    scores.len(),
                    candidates.len().min(scores.len())
                );
            }
        }
    }

    for (candidate, score) in candidates.iter_mut().zip(scores) {
        candidate.score = Some(*score);
    }

    Ok(())
}

/// Descending by score; unscored entries go last. NaN compares equal.
pub fn compare_scores(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort, so equal scores keep arrival order.
pub fn sort_by_score(candidates: &mut [CandidatePaper]) {
    candidates.sort_by(|a, b| compare_scores(a.score, b.score));
}

/// Merge then sort.
pub fn merge_and_rank(
    mut candidates: Vec<CandidatePaper>,
    scores: &[f64],
    policy: AlignmentPolicy,
) -> Result<Vec<CandidatePaper>> {
    merge_scores(&mut candidates, scores, policy)?;
    sort_by_score(&mut candidates);
    Ok(candidates)
}
