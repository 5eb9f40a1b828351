use std::fmt;
use std::str::FromStr;

pub const DEFAULT_SEARCH_ENDPOINT: &str = "http://export.arxiv.org/api/query";

pub const DEFAULT_SCORING_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/sentence-transformers/all-MiniLM-L6-v2";

/// What to do when the scoring service returns a different number of
/// scores than candidates were submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentPolicy {
    /// Pair positionally up to the shorter length; unpaired candidates keep
    /// a null score and unpaired scores are dropped.
    #[default]
    Truncate,
    /// Any length mismatch fails the request.
    Strict,
}

impl FromStr for AlignmentPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncate" => Ok(AlignmentPolicy::Truncate),
            "strict" => Ok(AlignmentPolicy::Strict),
            other => Err(format!(
                "unknown alignment policy '{}', expected 'truncate' or 'strict'",
                other
            )),
        }
    }
}

impl fmt::Display for AlignmentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentPolicy::Truncate => f.write_str("truncate"),
            AlignmentPolicy::Strict => f.write_str("strict"),
        }
    }
}

/// Process-wide settings, built once at startup and handed to the clients.
#[derive(Clone)]
pub struct ServiceConfig {
    pub search_endpoint: String,
    pub scoring_endpoint: String,
    /// Bearer token for the scoring service. Requests go out without an
    /// `Authorization` header when unset.
    pub api_token: Option<String>,
    pub alignment: AlignmentPolicy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            scoring_endpoint: DEFAULT_SCORING_ENDPOINT.to_string(),
            api_token: None,
            alignment: AlignmentPolicy::default(),
        }
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("search_endpoint", &self.search_endpoint)
            .field("scoring_endpoint", &self.scoring_endpoint)
            .field("has_api_token", &self.api_token.is_some())
            .field("alignment", &self.alignment)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_token() {
        let config = ServiceConfig {
            api_token: Some("hf_secret".to_string()),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hf_secret"));
        assert!(rendered.contains("has_api_token: true"));
    }

    #[test]
    fn test_alignment_from_str() {
        assert_eq!("truncate".parse::<AlignmentPolicy>(), Ok(AlignmentPolicy::Truncate));
        assert_eq!("strict".parse::<AlignmentPolicy>(), Ok(AlignmentPolicy::Strict));
        assert!("lenient".parse::<AlignmentPolicy>().is_err());
    }
}
