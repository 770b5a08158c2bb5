use embed::EmbedError;
use thiserror::Error;

/// Errors produced by the classification layer.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Invalid ranking configuration (zero result cap, percentage out of
    /// range).
    #[error("invalid classify config: {0}")]
    InvalidConfig(String),
    /// The query vector's length disagrees with the corpus dimension. Never
    /// silently coerced; a truncated or padded comparison would produce
    /// garbage similarities.
    #[error("query embedding has dimension {query}, corpus expects {corpus}")]
    DimensionMismatch { query: usize, corpus: usize },
    /// The embedding provider failed or violated its batch contract.
    #[error("embedding provider error: {0}")]
    Embed(#[from] EmbedError),
}
