//! Semcat corpus layer.
//!
//! A [`Corpus`] is the labeled reference set the classifier ranks against:
//! an immutable, in-memory sequence of `(text, category, embedding)` samples
//! sharing one embedding dimension. This crate owns loading that shape from
//! JSON, validating it, and partitioning it for held-out evaluation.
//!
//! ## Invariants worth knowing
//!
//! - Sample order is stable; ranking ties resolve by corpus order, so a
//!   deterministic corpus gives deterministic results.
//! - Every sample in a corpus has the same non-zero embedding dimension,
//!   checked at construction. An empty corpus is legal (it ranks to no
//!   neighbors) but an empty serialized source is a load error.
//! - No mutation API. Reload means building a new `Corpus` and swapping the
//!   reference, never editing in place.
//!
//! ## Splitting
//!
//! [`split`] shuffles with Fisher-Yates and cuts at
//! `round(N * comparison_percent / 100)`. The seed is injectable through
//! [`SplitConfig`] so evaluation runs can be replayed exactly.

mod corpus;
mod error;
mod sample;
mod split;

pub use crate::corpus::Corpus;
pub use crate::error::CorpusError;
pub use crate::sample::Sample;
pub use crate::split::{split, Split, SplitConfig};
