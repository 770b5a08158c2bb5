use std::sync::{Arc, RwLock};
use std::time::Instant;

use corpus::Corpus;
use embed::{check_batch, TextEmbedder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::metrics::metrics_recorder;
use crate::rank::{rank, RankConfig};
use crate::resolve::{resolve, VoteStrategy, UNRESOLVED_CATEGORY};
use crate::ClassifyError;

/// Outcome of classifying one input item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassificationResult {
    /// The input text, returned verbatim as an opaque key.
    pub text: String,
    /// Winning category, or [`UNRESOLVED_CATEGORY`] when no neighbor cleared
    /// the threshold.
    pub predicted_category: String,
    /// Similarity of the single nearest neighbor, regardless of vote
    /// strategy; 0.0 when there were no neighbors.
    pub confidence: f32,
    /// Same top-1 similarity, surfaced separately so callers need not know
    /// the confidence convention.
    pub nearest_score: f32,
    /// How many neighbors survived thresholding and truncation.
    pub neighbor_count: usize,
}

/// Classification engine: a read-only corpus behind a swappable reference,
/// plus the ranking and vote configuration applied to every request.
///
/// Concurrent classification needs no locking beyond the pointer read; each
/// request clones the `Arc` and scans an immutable snapshot. A corpus reload
/// is [`swap_corpus`](Classifier::swap_corpus), an atomic reference exchange,
/// so in-flight requests finish against the snapshot they started with.
#[derive(Debug)]
pub struct Classifier {
    corpus: RwLock<Arc<Corpus>>,
    rank_cfg: RankConfig,
    strategy: VoteStrategy,
}

impl Classifier {
    pub fn new(
        corpus: Arc<Corpus>,
        rank_cfg: RankConfig,
        strategy: VoteStrategy,
    ) -> Result<Self, ClassifyError> {
        rank_cfg.validate()?;
        Ok(Self {
            corpus: RwLock::new(corpus),
            rank_cfg,
            strategy,
        })
    }

    /// Snapshot of the current corpus.
    pub fn corpus(&self) -> Arc<Corpus> {
        self.corpus
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Atomically replace the corpus. Requests already running keep their
    /// old snapshot; new requests see the replacement.
    pub fn swap_corpus(&self, corpus: Arc<Corpus>) {
        let mut guard = self
            .corpus
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = corpus;
    }

    pub fn rank_config(&self) -> &RankConfig {
        &self.rank_cfg
    }

    pub fn strategy(&self) -> VoteStrategy {
        self.strategy
    }

    /// Classify an item whose embedding the caller already holds.
    pub fn classify_vector(
        &self,
        text: &str,
        embedding: &[f32],
    ) -> Result<ClassificationResult, ClassifyError> {
        let start = Instant::now();
        let corpus = self.corpus();

        let ranked = rank(embedding, &corpus, &self.rank_cfg)?;
        let predicted = resolve(&ranked, self.strategy)
            .unwrap_or(UNRESOLVED_CATEGORY)
            .to_string();
        let nearest_score = ranked.first().map(|r| r.score).unwrap_or(0.0);
        let resolved = !ranked.is_empty();

        if let Some(recorder) = metrics_recorder() {
            recorder.record_classify(start.elapsed(), ranked.len(), resolved);
        }
        debug!(
            neighbors = ranked.len(),
            predicted = %predicted,
            "classified item"
        );

        Ok(ClassificationResult {
            text: text.to_string(),
            predicted_category: predicted,
            confidence: nearest_score,
            nearest_score,
            neighbor_count: ranked.len(),
        })
    }

    /// Classify a single raw text through an embedding provider.
    pub fn classify_text(
        &self,
        embedder: &dyn TextEmbedder,
        text: &str,
    ) -> Result<ClassificationResult, ClassifyError> {
        let mut results = self.classify_texts(embedder, &[text])?;
        Ok(results.swap_remove(0))
    }

    /// Classify a batch of raw texts with one provider call.
    ///
    /// The provider's output is checked against its batch contract before any
    /// ranking happens; a provider failure or contract violation fails the
    /// whole batch rather than classifying against partial data.
    pub fn classify_texts(
        &self,
        embedder: &dyn TextEmbedder,
        texts: &[&str],
    ) -> Result<Vec<ClassificationResult>, ClassifyError> {
        let embeddings = embedder.embed(texts)?;
        check_batch(texts.len(), &embeddings, embedder.dimension())?;

        embeddings
            .iter()
            .map(|embedding| self.classify_vector(&embedding.text, &embedding.vector))
            .collect()
    }
}
