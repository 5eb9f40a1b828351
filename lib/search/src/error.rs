use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The request never produced a response (DNS, connect, IO).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The search API answered with a non-success status.
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// The body is not a usable Atom feed.
    #[error("{0}")]
    Parse(String),
}

impl From<SearchError> for paperrank_core::Error {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Parse(msg) => paperrank_core::Error::SearchParse(msg),
            other => paperrank_core::Error::SearchUnavailable(other.to_string()),
        }
    }
}
