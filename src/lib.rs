//! Workspace umbrella crate for semcat (semantic categorization).
//!
//! Semcat classifies free-text items into categories by comparing an
//! embedding of each item against a corpus of previously embedded, labeled
//! examples and letting the most similar neighbors vote. This crate stitches
//! the stage crates together so callers get a single API entry point:
//!
//! - `corpus`: labeled vector corpus, JSON loading, held-out splitting.
//! - `embed`: the embedding-provider boundary plus a deterministic stub.
//! - `classify`: cosine ranking, vote resolution, the classification engine.
//! - `evaluate`: batched held-out evaluation and quality metrics.
//!
//! ## Typical flow
//!
//! ```no_run
//! use std::sync::Arc;
//! use semcat::{
//!     build_classifier, run_holdout_evaluation, Corpus, SemcatConfig, StubEmbedder,
//! };
//!
//! let cfg = SemcatConfig::from_file("semcat.yaml").expect("config");
//! let corpus = Corpus::from_json_file("corpus.json").expect("corpus");
//!
//! // Score the configuration on held-out data first.
//! let report = run_holdout_evaluation(&corpus, &cfg).expect("evaluation");
//! println!("accuracy {:.2}%", report.accuracy * 100.0);
//!
//! // Then classify new items with the same settings.
//! let embedder = StubEmbedder::new(cfg.embed.clone()).expect("embedder");
//! let classifier = build_classifier(Arc::new(corpus), &cfg).expect("classifier");
//! let result = classifier
//!     .classify_text(&embedder, "the app crashes on startup")
//!     .expect("classification");
//! println!("{} -> {}", result.text, result.predicted_category);
//! ```

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

pub use classify::{
    cosine_similarity, rank, resolve, set_classify_metrics, ClassificationResult, Classifier,
    ClassifyError, ClassifyMetrics, RankConfig, RankedSample, VoteStrategy, UNRESOLVED_CATEGORY,
};
pub use corpus::{split, Corpus, CorpusError, Sample, Split, SplitConfig};
pub use embed::{
    check_batch, l2_normalize, EmbedConfig, EmbedError, StubEmbedder, TextEmbedder, TextEmbedding,
};
pub use evaluate::{
    CategoryPrediction, CategoryTally, EvalConfig, EvalError, EvaluationRecord, Evaluator,
    MetricsReport,
};

pub mod config;

pub use crate::config::{ConfigLoadError, SemcatConfig};

/// Errors surfaced by the umbrella helpers.
#[derive(Debug, Error)]
pub enum SemcatError {
    #[error("config failure: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("corpus failure: {0}")]
    Corpus(#[from] CorpusError),
    #[error("classification failure: {0}")]
    Classify(#[from] ClassifyError),
    #[error("evaluation failure: {0}")]
    Eval(#[from] EvalError),
}

/// Build a classification engine from a corpus and a loaded configuration.
pub fn build_classifier(
    corpus: Arc<Corpus>,
    cfg: &SemcatConfig,
) -> Result<Classifier, SemcatError> {
    let classifier = Classifier::new(
        corpus,
        cfg.classify.rank_config(),
        cfg.classify.strategy(),
    )?;
    Ok(classifier)
}

/// Split a corpus per the configuration, evaluate the held-out probes
/// against the comparison pool, and return the quality report.
pub fn run_holdout_evaluation(
    corpus: &Corpus,
    cfg: &SemcatConfig,
) -> Result<MetricsReport, SemcatError> {
    let split = corpus::split(corpus, &cfg.split)?;
    debug!(
        comparison = split.comparison.len(),
        evaluation = split.evaluation.len(),
        "holdout split ready"
    );
    let evaluator = Evaluator::new(cfg.eval_config())?;
    let report = evaluator.evaluate(&split.evaluation, &split.comparison)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis_corpus() -> Corpus {
        // Two perfectly separated clusters of exact duplicates: cross-cluster
        // similarity is exactly 0 and gets filtered by the strictly-greater
        // threshold, so any 4-of-6 comparison set classifies both holdout
        // probes correctly whatever the shuffle does.
        Corpus::from_samples(vec![
            Sample::new("p1", "pos", vec![1.0, 0.0]),
            Sample::new("p2", "pos", vec![1.0, 0.0]),
            Sample::new("p3", "pos", vec![1.0, 0.0]),
            Sample::new("n1", "neg", vec![0.0, 1.0]),
            Sample::new("n2", "neg", vec![0.0, 1.0]),
            Sample::new("n3", "neg", vec![0.0, 1.0]),
        ])
        .expect("corpus")
    }

    #[test]
    fn holdout_evaluation_runs_from_config() {
        let yaml = r#"
classify:
  max_results: 3
  threshold_percent: 0.0
split:
  comparison_percent: 66.0
  seed: 11
"#;
        let cfg = SemcatConfig::from_yaml(yaml).expect("config");
        let report = run_holdout_evaluation(&axis_corpus(), &cfg).expect("evaluation");
        assert_eq!(report.total_predictions, 2);
        assert!((report.accuracy - 1.0).abs() < 1e-9);
        assert!(report.avg_confidence > 0.999);
    }

    #[test]
    fn classifier_builds_from_config_defaults() {
        let cfg = SemcatConfig::default();
        let classifier = build_classifier(Arc::new(axis_corpus()), &cfg).expect("classifier");
        let result = classifier
            .classify_vector("probe", &[1.0, 0.0])
            .expect("classification");
        assert_eq!(result.predicted_category, "pos");
    }
}
