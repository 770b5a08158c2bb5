//! Semcat held-out evaluation layer.
//!
//! Given a split corpus (see `corpus::split`), the [`Evaluator`] classifies
//! every held-out probe against the comparison pool with the same
//! rank-and-resolve path production classification uses, then aggregates the
//! outcomes into a [`MetricsReport`]: overall accuracy, mean confidence, and
//! per-category precision/recall counters.
//!
//! Probes are processed in bounded batches, optionally fanned out across
//! rayon workers. Batching caps resource usage only; the report is identical
//! for any batch size and for serial versus parallel execution, because each
//! probe's ranking is a pure function of the probe and the comparison
//! corpus.
//!
//! A failed ranking call fails the whole run. Skipping probes would leave
//! the denominator short and quietly inflate the reported quality.

mod error;
mod evaluator;
mod metrics;
mod record;

pub use crate::error::EvalError;
pub use crate::evaluator::{EvalConfig, Evaluator};
pub use crate::metrics::{CategoryTally, MetricsReport};
pub use crate::record::{CategoryPrediction, EvaluationRecord};
