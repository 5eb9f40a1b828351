//! Sentence-similarity inference client
//!
//! Sends the reference sentence and every candidate in one request and
//! returns the scores untouched. No retries, no caching.

use crate::error::Result;
use crate::payload::{SimilarityScorePayload, SimilarityScores};
use async_trait::async_trait;
use paperrank_core::{ScoreOutcome, ServiceConfig, SimilarityScorer};
use reqwest::Client;
use std::fmt;
use tracing::{debug, warn};

/// Client for a hosted sentence-similarity model
/// (Hugging Face Inference API `sentence-similarity` task).
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
}

impl InferenceClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_token: None,
        }
    }

    /// Set the bearer token sent with every request.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        let client = Self::new(config.scoring_endpoint.clone());
        match &config.api_token {
            Some(token) => client.with_api_token(token.clone()),
            None => client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Score `sentences` against `reference`.
    ///
    /// A non-success status yields [`ScoreOutcome::Unavailable`]; the scores
    /// of a successful call are returned as-is, without length checks.
    ///
    /// # Errors
    /// - [`ScoringError::Transport`](crate::ScoringError::Transport) if no response arrived
    /// - [`ScoringError::Decode`](crate::ScoringError::Decode) if a success body is not a number array
    pub async fn score(&self, reference: &str, sentences: &[&str]) -> Result<ScoreOutcome> {
        let payload = SimilarityScorePayload::new(reference, sentences);

        let mut request = self.client.post(&self.endpoint).json(&payload);
        if let Some(ref token) = self.api_token {
            request = request.bearer_auth(token);
        }

        debug!("POST {} with {} sentences", self.endpoint, sentences.len());
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Similarity service returned {}: {}", status, body);
            return Ok(ScoreOutcome::Unavailable {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let scores: SimilarityScores = serde_json::from_slice(&bytes)?;
        Ok(ScoreOutcome::Scored(scores))
    }
}

impl fmt::Debug for InferenceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceClient")
            .field("endpoint", &self.endpoint)
            .field("has_api_token", &self.api_token.is_some())
            .finish()
    }
}

#[async_trait]
impl SimilarityScorer for InferenceClient {
    async fn score(
        &self,
        reference: &str,
        sentences: &[&str],
    ) -> paperrank_core::Result<ScoreOutcome> {
        Ok(InferenceClient::score(self, reference, sentences).await?)
    }

    fn name(&self) -> &str {
        "inference"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScoringError;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    const MODEL_PATH: &str = "/models/sentence-transformers/all-MiniLM-L6-v2";

    fn client_for(server: &MockServer) -> InferenceClient {
        InferenceClient::new(format!("{}{}", server.uri(), MODEL_PATH))
    }

    #[tokio::test]
    async fn test_scores_returned_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(header("authorization", "Bearer hf_test"))
            .and(body_json(json!({
                "inputs": {
                    "source_sentence": "graph neural networks",
                    "sentences": ["a", "b", "c"]
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([0.2, 0.9, 0.5])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).with_api_token("hf_test");
        let outcome = client
            .score("graph neural networks", &["a", "b", "c"])
            .await
            .unwrap();

        assert_eq!(outcome, ScoreOutcome::Scored(vec![0.2, 0.9, 0.5]));
    }

    #[tokio::test]
    async fn test_no_token_no_auth_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([0.1])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.score("ref", &["a"]).await.unwrap();

        let received: Vec<Request> = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        assert!(!received[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_non_success_is_soft_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let outcome = client_for(&server).score("ref", &["a"]).await.unwrap();
        assert_eq!(outcome, ScoreOutcome::Unavailable { status: 401 });
    }

    #[tokio::test]
    async fn test_count_mismatch_passed_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([0.4])))
            .mount(&server)
            .await;

        let outcome = client_for(&server).score("ref", &["a", "b"]).await.unwrap();
        assert_eq!(outcome, ScoreOutcome::Scored(vec![0.4]));
    }

    #[tokio::test]
    async fn test_unexpected_body_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"error": "Model is loading"})),
            )
            .mount(&server)
            .await;

        let result = client_for(&server).score("ref", &["a"]).await;
        assert!(matches!(result, Err(ScoringError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unreachable_is_scoring_unavailable() {
        let scorer: Box<dyn SimilarityScorer> =
            Box::new(InferenceClient::new("http://127.0.0.1:1/models/x"));
        let result = scorer.score("ref", &["a"]).await;
        assert!(matches!(
            result,
            Err(paperrank_core::Error::ScoringUnavailable(_))
        ));
    }

    #[test]
    fn test_from_config_and_debug() {
        let config = ServiceConfig {
            api_token: Some("hf_secret".to_string()),
            ..Default::default()
        };
        let client = InferenceClient::from_config(&config);
        assert_eq!(client.endpoint(), paperrank_core::DEFAULT_SCORING_ENDPOINT);

        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("hf_secret"));
        assert!(rendered.contains("has_api_token: true"));
    }
}
