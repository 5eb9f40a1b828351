//! # PaperRank API
//!
//! HTTP surface of PaperRank:
//!
//! - `POST /similarity/` - rank arXiv candidates against a reference abstract
//! - `GET /health` - liveness probe
//!
//! Failures come back as `{"detail": "..."}` with 404 for empty outcomes,
//! 422 for rejected bodies and 500 otherwise.

pub mod rest;

pub use rest::{configure, ApiError, RestApi};
