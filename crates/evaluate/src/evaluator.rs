use classify::{rank, resolve, RankConfig, VoteStrategy, UNRESOLVED_CATEGORY};
use corpus::{Corpus, Sample};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{EvalError, EvaluationRecord, MetricsReport};

/// Configuration for an evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvalConfig {
    /// Ranking knobs applied to every probe.
    #[serde(default)]
    pub rank: RankConfig,
    /// Vote strategy used to resolve each probe's category.
    #[serde(default)]
    pub strategy: VoteStrategy,
    /// Probes are processed in batches of this size to bound in-flight work.
    /// Purely a resource-control knob; results are identical for any batch
    /// size.
    #[serde(default = "EvalConfig::default_batch_size")]
    pub batch_size: usize,
    /// Fan a batch out across the rayon thread pool. Ranking is pure, so
    /// parallel and serial runs produce identical records.
    #[serde(default)]
    pub use_parallel: bool,
}

impl EvalConfig {
    pub(crate) fn default_batch_size() -> usize {
        100
    }

    pub fn validate(&self) -> Result<(), EvalError> {
        if self.batch_size == 0 {
            return Err(EvalError::InvalidInput(
                "batch_size must be greater than zero".into(),
            ));
        }
        self.rank.validate()?;
        Ok(())
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            rank: RankConfig::default(),
            strategy: VoteStrategy::default(),
            batch_size: Self::default_batch_size(),
            use_parallel: false,
        }
    }
}

/// Drives classification of every held-out probe against a comparison
/// corpus and aggregates the outcomes into a [`MetricsReport`].
#[derive(Debug)]
pub struct Evaluator {
    cfg: EvalConfig,
}

impl Evaluator {
    pub fn new(cfg: EvalConfig) -> Result<Self, EvalError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &EvalConfig {
        &self.cfg
    }

    /// Classify every probe and return the raw per-probe records.
    ///
    /// Any ranking failure (e.g., a dimension mismatch between the probe and
    /// the comparison corpus) fails the whole run; metrics computed from a
    /// silently truncated record set would misreport quality.
    pub fn evaluate_records(
        &self,
        evaluation: &Corpus,
        comparison: &Corpus,
    ) -> Result<Vec<EvaluationRecord>, EvalError> {
        let mut records = Vec::with_capacity(evaluation.len());

        for batch in evaluation.samples().chunks(self.cfg.batch_size) {
            let chunk: Result<Vec<EvaluationRecord>, EvalError> = if self.cfg.use_parallel {
                batch
                    .par_iter()
                    .map(|probe| self.evaluate_probe(probe, comparison))
                    .collect()
            } else {
                batch
                    .iter()
                    .map(|probe| self.evaluate_probe(probe, comparison))
                    .collect()
            };
            records.extend(chunk?);
            debug!(processed = records.len(), total = evaluation.len(), "evaluation progress");
        }

        Ok(records)
    }

    /// Classify every probe and aggregate into a metrics report.
    pub fn evaluate(
        &self,
        evaluation: &Corpus,
        comparison: &Corpus,
    ) -> Result<MetricsReport, EvalError> {
        let records = self.evaluate_records(evaluation, comparison)?;
        let report = MetricsReport::from_records(&records)?;
        info!(
            probes = report.total_predictions,
            correct = report.correct_predictions,
            accuracy = report.accuracy,
            "evaluation finished"
        );
        Ok(report)
    }

    fn evaluate_probe(
        &self,
        probe: &Sample,
        comparison: &Corpus,
    ) -> Result<EvaluationRecord, EvalError> {
        let ranked = rank(&probe.embedding, comparison, &self.cfg.rank)?;
        let predicted = resolve(&ranked, self.cfg.strategy)
            .unwrap_or(UNRESOLVED_CATEGORY)
            .to_string();
        let confidence = ranked.first().map(|r| r.score).unwrap_or(0.0);

        Ok(EvaluationRecord {
            text: probe.text.clone(),
            predicted_category: predicted,
            actual_category: probe.category.clone(),
            confidence,
        })
    }
}
