use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{CategoryPrediction, EvalError, EvaluationRecord};

/// Per-category counters from which precision and recall derive.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTally {
    /// Times this category was predicted.
    pub predicted: usize,
    /// Times it was predicted and the label agreed.
    pub correct: usize,
    /// Times the label carried this category.
    pub actual: usize,
}

impl CategoryTally {
    /// `correct / predicted`, 0.0 when the category was never predicted.
    pub fn precision(&self) -> f64 {
        if self.predicted == 0 {
            0.0
        } else {
            self.correct as f64 / self.predicted as f64
        }
    }

    /// `correct / actual`, 0.0 when the category never occurred.
    pub fn recall(&self) -> f64 {
        if self.actual == 0 {
            0.0
        } else {
            self.correct as f64 / self.actual as f64
        }
    }
}

/// Aggregate classifier quality over a set of evaluation outcomes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricsReport {
    /// Number of prediction slots (including absent ones in the pairwise
    /// form).
    pub total_predictions: usize,
    /// Pairs where prediction and label agreed.
    pub correct_predictions: usize,
    /// `correct_predictions / valid pairs`, 0.0 with no valid pairs.
    pub accuracy: f64,
    /// Mean confidence over present predictions, 0.0 with none.
    pub avg_confidence: f64,
    /// Per-category counters, keyed by category name. A category appears
    /// here whenever it was predicted or labeled at least once.
    pub category_metrics: BTreeMap<String, CategoryTally>,
}

impl MetricsReport {
    /// Aggregate the general pairwise form: predictions and ground-truth
    /// labels as parallel sequences in which either side of a pair may be
    /// absent. Mismatched lengths are rejected; an absent prediction still
    /// counts toward `total_predictions` but not toward accuracy or
    /// confidence, mirroring how partially-failed upstream stages are
    /// scored.
    pub fn from_pairs(
        predictions: &[Option<CategoryPrediction>],
        actuals: &[Option<String>],
    ) -> Result<Self, EvalError> {
        if predictions.len() != actuals.len() {
            return Err(EvalError::InvalidInput(format!(
                "predictions and actuals must have equal length, got {} and {}",
                predictions.len(),
                actuals.len()
            )));
        }

        let mut report = MetricsReport {
            total_predictions: predictions.len(),
            ..Default::default()
        };
        let mut total_confidence = 0.0f64;
        let mut valid_predictions = 0usize;
        let mut valid_pairs = 0usize;

        for (prediction, actual) in predictions.iter().zip(actuals) {
            if let Some(prediction) = prediction {
                total_confidence += f64::from(prediction.confidence);
                valid_predictions += 1;
                report
                    .category_metrics
                    .entry(prediction.category.clone())
                    .or_default()
                    .predicted += 1;
            }

            if let Some(actual) = actual {
                report
                    .category_metrics
                    .entry(actual.clone())
                    .or_default()
                    .actual += 1;
            }

            if let (Some(prediction), Some(actual)) = (prediction, actual) {
                valid_pairs += 1;
                if prediction.category == *actual {
                    report.correct_predictions += 1;
                    report
                        .category_metrics
                        .entry(prediction.category.clone())
                        .or_default()
                        .correct += 1;
                }
            }
        }

        if valid_pairs > 0 {
            report.accuracy = report.correct_predictions as f64 / valid_pairs as f64;
        }
        if valid_predictions > 0 {
            report.avg_confidence = total_confidence / valid_predictions as f64;
        }

        Ok(report)
    }

    /// Aggregate pipeline records, where every record carries both a
    /// prediction and a label by construction, so every pair is valid and
    /// `accuracy == correct_predictions / total_predictions`.
    pub fn from_records(records: &[EvaluationRecord]) -> Result<Self, EvalError> {
        let predictions: Vec<Option<CategoryPrediction>> = records
            .iter()
            .map(|r| {
                Some(CategoryPrediction {
                    category: r.predicted_category.clone(),
                    confidence: r.confidence,
                })
            })
            .collect();
        let actuals: Vec<Option<String>> = records
            .iter()
            .map(|r| Some(r.actual_category.clone()))
            .collect();
        Self::from_pairs(&predictions, &actuals)
    }
}
