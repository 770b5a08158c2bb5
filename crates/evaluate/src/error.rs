use classify::ClassifyError;
use thiserror::Error;

/// Errors produced by the evaluation layer.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Malformed configuration or mismatched-length input pairs.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A sample's ranking call failed. The whole run fails rather than
    /// skipping the sample, so reported metrics never undercount.
    #[error("classification error: {0}")]
    Classify(#[from] ClassifyError),
}
