use thiserror::Error;

/// Errors surfaced by embedding providers and by batch-contract checks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmbedError {
    /// Configuration is inconsistent (e.g., a zero dimension).
    #[error("invalid embed config: {0}")]
    InvalidConfig(String),
    /// The caller passed an empty batch.
    #[error("no input texts to embed")]
    EmptyInput,
    /// An individual input was empty or whitespace-only.
    #[error("input at index {index} is empty")]
    EmptyText { index: usize },
    /// The provider could not produce an embedding for an input.
    #[error("embedding generation failed: {0}")]
    Generation(String),
    /// The provider returned a different number of embeddings than inputs.
    #[error("provider returned {returned} embeddings for {requested} inputs")]
    BatchShape { requested: usize, returned: usize },
    /// An embedding does not have the provider's advertised dimension.
    #[error("embedding at index {index} has dimension {found}, expected {expected}")]
    Dimension {
        index: usize,
        found: usize,
        expected: usize,
    },
    /// An embedding carries no information (all components zero).
    #[error("embedding at index {index} is all-zero")]
    DegenerateVector { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_index() {
        let err = EmbedError::Dimension {
            index: 3,
            found: 10,
            expected: 384,
        };
        assert!(err.to_string().contains("index 3"));
        assert!(err.to_string().contains("expected 384"));

        let err = EmbedError::DegenerateVector { index: 7 };
        assert!(err.to_string().contains("index 7"));
    }

    #[test]
    fn batch_shape_reports_both_counts() {
        let err = EmbedError::BatchShape {
            requested: 4,
            returned: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains('2'));
    }
}
