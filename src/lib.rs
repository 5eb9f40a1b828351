//! # PaperRank
//!
//! Ranks arXiv papers by semantic similarity to a reference abstract.
//!
//! Given an abstract and a search query, PaperRank fetches candidates from the
//! arXiv API, asks a hosted sentence-similarity model to score each
//! candidate's abstract against the reference, and returns the candidates
//! sorted by score. No similarity is computed locally.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! HF_API_TOKEN=hf_... paperrank --http-port 8000
//! curl -X POST localhost:8000/similarity/ \
//!     -H 'content-type: application/json' \
//!     -d '{"source_abstract": "We propose...", "query": "all:transformer"}'
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use paperrank::prelude::*;
//!
//! # async fn run() -> paperrank::Result<()> {
//! let service = paperrank::build_service(&ServiceConfig::default());
//! let request = SimilarityRequest::new("We propose a new attention mechanism.", "all:attention");
//! for paper in service.rank(&request).await? {
//!     println!("{:.3} {}", paper.score.unwrap_or_default(), paper.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - `paperrank-core` - Request model, errors, merge/sort, ranking service
//! - `paperrank-search` - arXiv client and Atom parsing
//! - `paperrank-similarity` - Similarity inference client
//! - `paperrank-api` - REST API

// Re-export core types
pub use paperrank_core::{
    AlignmentPolicy, CandidatePaper, Error, PaperSource, RankingService, Result, ScoreOutcome,
    ServiceConfig, SimilarityRequest, SimilarityScorer, SortBy, SortOrder,
};

// Re-export clients
pub use paperrank_search::ArxivClient;
pub use paperrank_similarity::InferenceClient;

// Re-export API
pub use paperrank_api::RestApi;

/// Wire the arXiv and inference clients into a ranking service.
pub fn build_service(config: &ServiceConfig) -> RankingService {
    RankingService::new(
        Box::new(ArxivClient::from_config(config)),
        Box::new(InferenceClient::from_config(config)),
        config.alignment,
    )
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AlignmentPolicy, ArxivClient, CandidatePaper, Error, InferenceClient, RankingService,
        RestApi, ServiceConfig, SimilarityRequest, SortBy, SortOrder,
    };
}
