use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Corpus, CorpusError};

/// Configuration for a held-out split.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SplitConfig {
    /// Percentage of the corpus reserved as the comparison (neighbor pool)
    /// set, in [0, 100]. The remainder becomes the evaluation set.
    #[serde(default = "SplitConfig::default_comparison_percent")]
    pub comparison_percent: f32,
    /// Shuffle seed. `None` draws a fresh seed, so production splits differ
    /// run to run; tests pass a fixed seed for exact replay.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SplitConfig {
    pub(crate) fn default_comparison_percent() -> f32 {
        80.0
    }

    pub fn validate(&self) -> Result<(), CorpusError> {
        if !(0.0..=100.0).contains(&self.comparison_percent) {
            return Err(CorpusError::InvalidConfig(format!(
                "comparison_percent must be within [0, 100], got {}",
                self.comparison_percent
            )));
        }
        Ok(())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            comparison_percent: Self::default_comparison_percent(),
            seed: None,
        }
    }
}

/// The two disjoint halves of a split corpus. Their multiset union equals
/// the input corpus.
#[derive(Debug, Clone)]
pub struct Split {
    /// Neighbor pool ranked against during classification.
    pub comparison: Corpus,
    /// Held-out labeled probes.
    pub evaluation: Corpus,
}

/// Randomly partition a corpus into comparison and evaluation sets.
///
/// A Fisher-Yates shuffle permutes the samples, then the first
/// `round(N * comparison_percent / 100)` go to the comparison set and the
/// rest to the evaluation set. `comparison_percent = 100` leaves the
/// evaluation set empty, `0` leaves the comparison set empty; both are valid.
pub fn split(corpus: &Corpus, cfg: &SplitConfig) -> Result<Split, CorpusError> {
    cfg.validate()?;

    let n = corpus.len();
    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = match cfg.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    for i in (1..n).rev() {
        let j = rng.usize(..=i);
        order.swap(i, j);
    }

    let comparison_len =
        ((n as f64) * (f64::from(cfg.comparison_percent) / 100.0)).round() as usize;
    let comparison_len = comparison_len.min(n);

    let samples = corpus.samples();
    let comparison: Vec<_> = order[..comparison_len]
        .iter()
        .map(|&i| samples[i].clone())
        .collect();
    let evaluation: Vec<_> = order[comparison_len..]
        .iter()
        .map(|&i| samples[i].clone())
        .collect();

    debug!(
        total = n,
        comparison = comparison.len(),
        evaluation = evaluation.len(),
        "corpus split"
    );

    Ok(Split {
        comparison: Corpus::from_validated(comparison, corpus.dimension()),
        evaluation: Corpus::from_validated(evaluation, corpus.dimension()),
    })
}
