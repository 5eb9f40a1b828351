use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a ranking request.
///
/// Variants stay transport-neutral; the REST layer decides which status code
/// each one maps to.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Search service unavailable: {0}")]
    SearchUnavailable(String),

    #[error("Malformed search response: {0}")]
    SearchParse(String),

    #[error("No abstracts found for the given query.")]
    NotFound,

    #[error("Similarity service unavailable: {0}")]
    ScoringUnavailable(String),

    #[error("Could not compute similarity.")]
    ScoreUnavailable,

    #[error("Expected {expected} similarity scores, got {actual}")]
    ScoreCountMismatch { expected: usize, actual: usize },
}

impl Error {
    /// True for the "nothing to return" outcomes, as opposed to failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound | Error::ScoreUnavailable)
    }
}
