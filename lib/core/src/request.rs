use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_MAX_RESULTS: u32 = 5;

/// Sort field forwarded to the search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    Relevance,
    LastUpdatedDate,
    #[default]
    SubmittedDate,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::LastUpdatedDate => "lastUpdatedDate",
            SortBy::SubmittedDate => "submittedDate",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /similarity/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityRequest {
    pub source_abstract: String,
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default)]
    pub sort_by: SortBy,
    #[serde(default)]
    pub sort_order: SortOrder,
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

impl SimilarityRequest {
    pub fn new(source_abstract: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            source_abstract: source_abstract.into(),
            query: query.into(),
            max_results: DEFAULT_MAX_RESULTS,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Shape checks serde cannot express. Query content is not inspected.
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(Error::InvalidRequest(
                "max_results must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_applied() {
        let req: SimilarityRequest = serde_json::from_value(json!({
            "source_abstract": "We study transformers.",
            "query": "all:transformer"
        }))
        .unwrap();

        assert_eq!(req.max_results, 5);
        assert_eq!(req.sort_by, SortBy::SubmittedDate);
        assert_eq!(req.sort_order, SortOrder::Descending);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_explicit_values() {
        let req: SimilarityRequest = serde_json::from_value(json!({
            "source_abstract": "x",
            "query": "cat:cs.CL",
            "max_results": 20,
            "sort_by": "lastUpdatedDate",
            "sort_order": "ascending"
        }))
        .unwrap();

        assert_eq!(req.max_results, 20);
        assert_eq!(req.sort_by, SortBy::LastUpdatedDate);
        assert_eq!(req.sort_order, SortOrder::Ascending);
    }

    #[test]
    fn test_unknown_sort_field_rejected() {
        let result: std::result::Result<SimilarityRequest, _> = serde_json::from_value(json!({
            "source_abstract": "x",
            "query": "y",
            "sort_by": "citations"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_query_rejected() {
        let result: std::result::Result<SimilarityRequest, _> =
            serde_json::from_value(json!({ "source_abstract": "x" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_max_results_invalid() {
        let req = SimilarityRequest::new("x", "y").with_max_results(0);
        assert!(matches!(req.validate(), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_sort_params_match_wire_names() {
        assert_eq!(SortBy::Relevance.as_str(), "relevance");
        assert_eq!(SortBy::SubmittedDate.to_string(), "submittedDate");
        assert_eq!(SortOrder::Descending.to_string(), "descending");
    }
}
