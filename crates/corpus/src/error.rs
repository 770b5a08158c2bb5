use std::io;

use thiserror::Error;

/// Errors produced while loading, validating, or splitting a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The source parsed but contained no samples.
    #[error("corpus source is empty")]
    EmptyCorpus,
    /// The source could not be parsed as a sequence of samples.
    #[error("failed to parse corpus source: {0}")]
    Parse(#[from] serde_json::Error),
    /// Low-level IO failure while reading a corpus file.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// A sample's embedding length disagrees with the corpus dimension.
    #[error("sample {index} has embedding dimension {found}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        found: usize,
        expected: usize,
    },
    /// A sample carries no embedding at all.
    #[error("sample {index} has an empty embedding")]
    EmptyEmbedding { index: usize },
    /// Split configuration is out of range.
    #[error("invalid split config: {0}")]
    InvalidConfig(String),
}
