use serde::{Deserialize, Serialize};

/// A paper returned by the literature search, optionally carrying the
/// similarity score assigned during ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePaper {
    pub title: String,
    pub authors: Vec<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Canonical identifier URL (the Atom `<id>`)
    pub link: String,
    /// `None` until scored; serialized as `null`
    pub score: Option<f64>,
}

impl CandidatePaper {
    pub fn new(
        title: impl Into<String>,
        authors: Vec<String>,
        abstract_text: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            authors,
            abstract_text: abstract_text.into(),
            link: link.into(),
            score: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}
