//! # PaperRank Similarity
//!
//! Client for an external sentence-similarity model.
//!
//! Scores are computed remotely; this crate only ships the reference
//! sentence and the candidate abstracts to the service and hands back what it
//! answers.
//!
//! ## Example
//!
//! ```rust,no_run
//! use paperrank_similarity::InferenceClient;
//! use paperrank_core::ScoreOutcome;
//!
//! # async fn run() -> Result<(), paperrank_similarity::ScoringError> {
//! let client = InferenceClient::new(
//!     "https://api-inference.huggingface.co/models/sentence-transformers/all-MiniLM-L6-v2",
//! )
//! .with_api_token("hf_...");
//!
//! match client.score("reference abstract", &["candidate one", "candidate two"]).await? {
//!     ScoreOutcome::Scored(scores) => println!("{:?}", scores),
//!     ScoreOutcome::Unavailable { status } => println!("service returned {}", status),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   inputs.source_sentence   ┌─────────────┐
//! │  Reference  │───────────────────────────>│             │
//! │  abstract   │                            │  Inference  │
//! └─────────────┘                            │   service   │
//! ┌─────────────┐   inputs.sentences[i]      │             │
//! │ Candidates  │───────────────────────────>│             │
//! └─────────────┘                            └─────────────┘
//!                                                   │
//!                                            scores[i] (same order)
//! ```

pub mod client;
pub mod error;
pub mod payload;

pub use client::InferenceClient;
pub use error::{Result, ScoringError};
pub use payload::{SimilarityInputs, SimilarityScorePayload, SimilarityScores};
