//! # PaperRank Search
//!
//! Literature search client for PaperRank.
//!
//! Queries the arXiv API and turns the Atom response into
//! [`CandidatePaper`](paperrank_core::CandidatePaper)s:
//!
//! - [`ArxivClient`] - HTTP client, implements [`PaperSource`](paperrank_core::PaperSource)
//! - [`parse_feed`] - Atom feed parser
//!
//! ## Example
//!
//! ```rust,no_run
//! use paperrank_search::ArxivClient;
//! use paperrank_core::{SortBy, SortOrder};
//!
//! # async fn run() -> Result<(), paperrank_search::SearchError> {
//! let client = ArxivClient::new("http://export.arxiv.org/api/query");
//! let papers = client
//!     .fetch_candidates("all:transformer", 5, SortBy::SubmittedDate, SortOrder::Descending)
//!     .await?;
//! for paper in papers {
//!     println!("{} ({})", paper.title, paper.link);
//! }
//! # Ok(())
//! # }
//! ```

pub mod arxiv;
pub mod atom;
pub mod error;

pub use arxiv::ArxivClient;
pub use atom::parse_feed;
pub use error::{Result, SearchError};
