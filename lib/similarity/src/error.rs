use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoringError>;

/// Hard failures of a scoring call.
///
/// A non-success HTTP status is not one of them: it is reported as
/// [`ScoreOutcome::Unavailable`](paperrank_core::ScoreOutcome::Unavailable).
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ScoringError> for paperrank_core::Error {
    fn from(e: ScoringError) -> Self {
        paperrank_core::Error::ScoringUnavailable(e.to_string())
    }
}
