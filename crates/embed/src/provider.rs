use serde::{Deserialize, Serialize};

use crate::EmbedError;

/// One embedded input: the original text plus its vector, in request order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextEmbedding {
    /// The input text, returned verbatim as an opaque key.
    pub text: String,
    /// The embedding vector, of the provider's fixed dimension.
    pub vector: Vec<f32>,
}

/// The embedding-provider boundary.
///
/// Implementations turn a batch of texts into one vector per text, in input
/// order, all of [`dimension`](TextEmbedder::dimension) length. A provider
/// that cannot embed an item must fail the whole batch; partial output and
/// placeholder vectors (empty or all-zero) are contract violations that
/// callers detect with [`check_batch`].
pub trait TextEmbedder: Send + Sync {
    /// Fixed output dimension of every vector this provider emits.
    fn dimension(&self) -> usize;

    /// Embed a batch of texts, preserving input order.
    fn embed(&self, texts: &[&str]) -> Result<Vec<TextEmbedding>, EmbedError>;
}

/// Enforce the batch contract on a provider's output: one embedding per
/// requested input, every vector of the expected dimension, none all-zero.
pub fn check_batch(
    requested: usize,
    embeddings: &[TextEmbedding],
    dimension: usize,
) -> Result<(), EmbedError> {
    if embeddings.len() != requested {
        return Err(EmbedError::BatchShape {
            requested,
            returned: embeddings.len(),
        });
    }
    for (index, embedding) in embeddings.iter().enumerate() {
        if embedding.vector.len() != dimension {
            return Err(EmbedError::Dimension {
                index,
                found: embedding.vector.len(),
                expected: dimension,
            });
        }
        if embedding.vector.iter().all(|v| *v == 0.0) {
            return Err(EmbedError::DegenerateVector { index });
        }
    }
    Ok(())
}
