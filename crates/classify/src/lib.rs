//! Semcat classification engine.
//!
//! Sits on top of the corpus layer (`corpus`) and the embedding boundary
//! (`embed`). Given a query vector, it ranks every corpus sample by cosine
//! similarity, keeps those above a configured threshold, and collapses the
//! survivors into one predicted category by vote.
//!
//! ## Core types
//!
//! - [`RankConfig`]: per-request tuning knobs, `max_results` and
//!   `threshold_percent`.
//! - [`RankedSample`]: a corpus sample with its similarity score attached.
//! - [`VoteStrategy`]: how neighbors vote, plain majority or mean-similarity
//!   weighted.
//! - [`ClassificationResult`]: predicted category plus top-1 confidence.
//! - [`Classifier`]: owns a swappable corpus snapshot and drives
//!   rank-and-resolve for raw texts (through any [`embed::TextEmbedder`])
//!   or precomputed vectors.
//!
//! ## Guarantees
//!
//! Ranking is a pure function: no I/O, no shared mutable state, stable
//! ordering (ties keep corpus order), and an explicit error when the query
//! dimension disagrees with the corpus. Degenerate situations that a
//! legitimate configuration can produce (empty corpus, over-strict
//! threshold) yield empty results, not errors.
//!
//! ## Observability
//!
//! Install a [`ClassifyMetrics`] implementation via [`set_classify_metrics`]
//! to receive per-request latency and neighbor counts.

mod engine;
mod error;
mod metrics;
mod rank;
mod resolve;
mod similarity;

pub use crate::engine::{ClassificationResult, Classifier};
pub use crate::error::ClassifyError;
pub use crate::metrics::{set_classify_metrics, ClassifyMetrics};
pub use crate::rank::{rank, RankConfig, RankedSample};
pub use crate::resolve::{resolve, VoteStrategy, UNRESOLVED_CATEGORY};
pub use crate::similarity::cosine_similarity;
