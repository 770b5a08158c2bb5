use corpus::Corpus;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::similarity::{cosine_with_query_norm, l2_norm};
use crate::ClassifyError;

/// Tuning knobs for a single ranking pass.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs or passed across process boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankConfig {
    /// Maximum number of neighbors returned.
    #[serde(default = "RankConfig::default_max_results")]
    pub max_results: usize,
    /// Similarity cutoff expressed as a percentage in [0, 100]; only
    /// candidates scoring strictly above `threshold_percent / 100` are kept.
    /// Cosine similarity lives in [-1, 1], but configuration speaks in
    /// percentages so callers never handle raw cosine units.
    #[serde(default = "RankConfig::default_threshold_percent")]
    pub threshold_percent: f32,
}

impl RankConfig {
    pub(crate) fn default_max_results() -> usize {
        40
    }

    pub(crate) fn default_threshold_percent() -> f32 {
        30.0
    }

    /// Validate the configuration for a single request.
    pub fn validate(&self) -> Result<(), ClassifyError> {
        if self.max_results == 0 {
            return Err(ClassifyError::InvalidConfig(
                "max_results must be greater than zero".into(),
            ));
        }
        if !(0.0..=100.0).contains(&self.threshold_percent) {
            return Err(ClassifyError::InvalidConfig(format!(
                "threshold_percent must be within [0, 100], got {}",
                self.threshold_percent
            )));
        }
        Ok(())
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            max_results: Self::default_max_results(),
            threshold_percent: Self::default_threshold_percent(),
        }
    }
}

/// A corpus sample with its similarity to the query attached. Transient
/// ranking output; not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedSample {
    pub text: String,
    pub category: String,
    pub embedding: Vec<f32>,
    /// Cosine similarity to the query, in [-1, 1].
    pub score: f32,
}

/// Rank corpus samples by cosine similarity to a query embedding.
///
/// Pure function of its inputs: a linear scan scores every sample, keeps
/// those strictly above the threshold, sorts descending (stable, so ties
/// keep corpus order), and truncates to `max_results`. An empty corpus or an
/// over-strict threshold yields an empty result, not an error. A query whose
/// length disagrees with the corpus dimension is rejected outright.
pub fn rank(
    query: &[f32],
    corpus: &Corpus,
    cfg: &RankConfig,
) -> Result<Vec<RankedSample>, ClassifyError> {
    cfg.validate()?;

    let Some(dimension) = corpus.dimension() else {
        return Ok(Vec::new());
    };
    if query.len() != dimension {
        return Err(ClassifyError::DimensionMismatch {
            query: query.len(),
            corpus: dimension,
        });
    }

    let threshold = cfg.threshold_percent / 100.0;
    let query_norm = l2_norm(query);

    let mut ranked: Vec<RankedSample> = corpus
        .samples()
        .iter()
        .filter_map(|sample| {
            let score = cosine_with_query_norm(query, query_norm, &sample.embedding);
            (score > threshold).then(|| RankedSample {
                text: sample.text.clone(),
                category: sample.category.clone(),
                embedding: sample.embedding.clone(),
                score,
            })
        })
        .collect();

    // Stable sort: equal scores keep corpus order for deterministic replay.
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(cfg.max_results);

    trace!(
        candidates = corpus.len(),
        kept = ranked.len(),
        threshold,
        "ranked query against corpus"
    );

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpus::Sample;

    fn corpus(entries: &[(&str, &str, &[f32])]) -> Corpus {
        Corpus::from_samples(
            entries
                .iter()
                .map(|(text, category, embedding)| {
                    Sample::new(*text, *category, embedding.to_vec())
                })
                .collect(),
        )
        .expect("corpus")
    }

    fn cfg(max_results: usize, threshold_percent: f32) -> RankConfig {
        RankConfig {
            max_results,
            threshold_percent,
        }
    }

    #[test]
    fn orders_by_score_descending() {
        let corpus = corpus(&[
            ("far", "a", &[0.0, 1.0]),
            ("near", "b", &[1.0, 0.1]),
            ("exact", "c", &[1.0, 0.0]),
        ]);
        let ranked = rank(&[1.0, 0.0], &corpus, &cfg(10, 0.0)).expect("rank");
        let texts: Vec<&str> = ranked.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["exact", "near"]);
        assert!((ranked[0].score - 1.0).abs() < 1e-6);
        assert!(ranked[0].score >= ranked[1].score);
    }

    #[test]
    fn threshold_is_strictly_greater() {
        // [3, 4] scores 3/5 against the x axis, the same float the threshold
        // 60/100 rounds to, so "edge" sits exactly on the cutoff and is
        // dropped.
        let corpus = corpus(&[
            ("edge", "a", &[3.0, 4.0]),
            ("same", "b", &[1.0, 0.0]),
        ]);
        let ranked = rank(&[1.0, 0.0], &corpus, &cfg(10, 60.0)).expect("rank");
        let texts: Vec<&str> = ranked.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["same"]);
    }

    #[test]
    fn every_result_clears_the_threshold() {
        let corpus = corpus(&[
            ("a", "x", &[1.0, 0.0]),
            ("b", "x", &[0.8, 0.6]),
            ("c", "x", &[0.0, 1.0]),
            ("d", "x", &[-1.0, 0.0]),
        ]);
        let ranked = rank(&[1.0, 0.0], &corpus, &cfg(10, 40.0)).expect("rank");
        assert!(!ranked.is_empty());
        for r in &ranked {
            assert!(r.score > 0.4);
        }
    }

    #[test]
    fn truncates_to_max_results() {
        let corpus = corpus(&[
            ("a", "x", &[1.0, 0.0]),
            ("b", "x", &[0.9, 0.1]),
            ("c", "x", &[0.8, 0.2]),
        ]);
        let ranked = rank(&[1.0, 0.0], &corpus, &cfg(2, 0.0)).expect("rank");
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn ties_keep_corpus_order() {
        let corpus = corpus(&[
            ("first", "x", &[2.0, 0.0]),
            ("second", "x", &[3.0, 0.0]),
            ("third", "x", &[1.0, 0.0]),
        ]);
        // All three are colinear with the query, so every score is 1.0.
        let ranked = rank(&[1.0, 0.0], &corpus, &cfg(10, 0.0)).expect("rank");
        let texts: Vec<&str> = ranked.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_corpus_yields_empty_result() {
        let corpus = Corpus::from_samples(Vec::new()).expect("corpus");
        let ranked = rank(&[1.0, 0.0], &corpus, &cfg(10, 0.0)).expect("rank");
        assert!(ranked.is_empty());
    }

    #[test]
    fn over_strict_threshold_yields_empty_result() {
        let corpus = corpus(&[("a", "x", &[1.0, 0.0])]);
        let ranked = rank(&[0.0, 1.0], &corpus, &cfg(10, 90.0)).expect("rank");
        assert!(ranked.is_empty());
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        let corpus = corpus(&[("a", "x", &[1.0, 0.0])]);
        let err = rank(&[1.0, 0.0, 0.0], &corpus, &cfg(10, 0.0))
            .expect_err("dimensions disagree");
        assert!(matches!(
            err,
            ClassifyError::DimensionMismatch {
                query: 3,
                corpus: 2
            }
        ));
    }

    #[test]
    fn zero_query_scores_nothing() {
        let corpus = corpus(&[("a", "x", &[1.0, 0.0])]);
        let ranked = rank(&[0.0, 0.0], &corpus, &cfg(10, 0.0)).expect("rank");
        assert!(ranked.is_empty());
    }

    #[test]
    fn zero_magnitude_corpus_entry_is_filtered_not_fatal() {
        let corpus = corpus(&[
            ("null", "x", &[0.0, 0.0]),
            ("live", "x", &[1.0, 0.0]),
        ]);
        let ranked = rank(&[1.0, 0.0], &corpus, &cfg(10, 0.0)).expect("rank");
        let texts: Vec<&str> = ranked.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["live"]);
    }

    #[test]
    fn invalid_configs_rejected() {
        let corpus = corpus(&[("a", "x", &[1.0, 0.0])]);
        assert!(matches!(
            rank(&[1.0, 0.0], &corpus, &cfg(0, 0.0)),
            Err(ClassifyError::InvalidConfig(_))
        ));
        assert!(matches!(
            rank(&[1.0, 0.0], &corpus, &cfg(10, 101.0)),
            Err(ClassifyError::InvalidConfig(_))
        ));
        assert!(matches!(
            rank(&[1.0, 0.0], &corpus, &cfg(10, -0.5)),
            Err(ClassifyError::InvalidConfig(_))
        ));
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = RankConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.max_results, 40);
        assert!((cfg.threshold_percent - 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn config_defaults_apply_to_omitted_fields() {
        let cfg: RankConfig = serde_json::from_str("{}").expect("parse");
        assert_eq!(cfg, RankConfig::default());
    }
}
