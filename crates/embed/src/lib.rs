//! Semcat embedding-provider boundary.
//!
//! The classification engine never produces vectors itself; it consumes them
//! through the [`TextEmbedder`] trait defined here. A provider takes a batch
//! of texts and returns one fixed-dimension vector per text, in input order.
//!
//! ## Contract
//!
//! - Output order matches input order, one embedding per input.
//! - Every vector has exactly [`TextEmbedder::dimension`] components.
//! - A provider that cannot embed an item fails the whole batch. It never
//!   substitutes an empty or all-zero placeholder, since such a vector would
//!   silently corrupt similarity ranking downstream. [`check_batch`] enforces
//!   this on any provider's output.
//!
//! ## Stub provider
//!
//! [`StubEmbedder`] generates deterministic hash-derived vectors with no
//! model assets. Same text, same vector, on any machine. It exists so the
//! engine can be exercised and tested offline; model-backed providers live
//! outside this repository and only need to implement [`TextEmbedder`].

mod config;
mod error;
mod normalize;
mod provider;
mod stub;

pub use crate::config::EmbedConfig;
pub use crate::error::EmbedError;
pub use crate::normalize::l2_normalize;
pub use crate::provider::{check_batch, TextEmbedder, TextEmbedding};
pub use crate::stub::StubEmbedder;
