//! # PaperRank Core
//!
//! Core library for PaperRank.
//!
//! This crate provides the request model and the ranking pipeline:
//!
//! - [`SimilarityRequest`] - Inbound request with search and sort parameters
//! - [`CandidatePaper`] - A paper returned by the literature search
//! - [`PaperSource`] / [`SimilarityScorer`] - Seams to the two remote services
//! - [`RankingService`] - Search, score, merge, sort
//! - [`ServiceConfig`] - Endpoints, credentials and alignment policy
//!
//! ## Example
//!
//! ```rust
//! use paperrank_core::{merge_and_rank, AlignmentPolicy, CandidatePaper};
//!
//! let candidates = vec![
//!     CandidatePaper::new("A", vec![], "first abstract", "http://arxiv.org/abs/a"),
//!     CandidatePaper::new("B", vec![], "second abstract", "http://arxiv.org/abs/b"),
//! ];
//! let ranked = merge_and_rank(candidates, &[0.2, 0.9], AlignmentPolicy::Truncate).unwrap();
//! assert_eq!(ranked[0].title, "B");
//! ```

pub mod config;
pub mod error;
pub mod paper;
pub mod provider;
pub mod ranking;
pub mod request;
pub mod service;

pub use config::{AlignmentPolicy, ServiceConfig, DEFAULT_SCORING_ENDPOINT, DEFAULT_SEARCH_ENDPOINT};
pub use error::{Error, Result};
pub use paper::CandidatePaper;
pub use provider::{PaperSource, ScoreOutcome, SimilarityScorer};
pub use ranking::{compare_scores, merge_and_rank, merge_scores, sort_by_score};
pub use request::{SimilarityRequest, SortBy, SortOrder, DEFAULT_MAX_RESULTS};
pub use service::RankingService;
