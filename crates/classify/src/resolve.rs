use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::RankedSample;

/// Placeholder category callers substitute when resolution yields nothing
/// (empty neighbor list, everything below threshold).
pub const UNRESOLVED_CATEGORY: &str = "???";

/// How a ranked neighbor list collapses into one predicted category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VoteStrategy {
    /// Plain occurrence count. Ties favor the category that reached the
    /// winning count first in rank (score-descending) order.
    Majority,
    /// Arithmetic mean of similarity scores per category. The mean, not the
    /// sum, so a category with few strong neighbors is not penalized against
    /// one with many weak neighbors. Ties favor the category encountered
    /// first in rank order.
    #[default]
    Weighted,
}

/// Collapse a ranked neighbor list into the best-supported category.
///
/// Returns `None` when `ranked` is empty; callers typically substitute
/// [`UNRESOLVED_CATEGORY`]. The strategy only picks the winner; the
/// confidence reported alongside a classification is always the top-1
/// similarity score, never the vote statistic.
pub fn resolve(ranked: &[RankedSample], strategy: VoteStrategy) -> Option<&str> {
    if ranked.is_empty() {
        return None;
    }
    match strategy {
        VoteStrategy::Majority => resolve_majority(ranked),
        VoteStrategy::Weighted => resolve_weighted(ranked),
    }
}

fn resolve_majority(ranked: &[RankedSample]) -> Option<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut best: Option<&str> = None;
    let mut max_count = 0usize;

    for sample in ranked {
        let count = counts.entry(sample.category.as_str()).or_insert(0);
        *count += 1;
        // Strictly greater: on a tie the earlier (higher-ranked) category
        // already holds the maximum and keeps it.
        if *count > max_count {
            max_count = *count;
            best = Some(sample.category.as_str());
        }
    }

    best
}

fn resolve_weighted(ranked: &[RankedSample]) -> Option<&str> {
    // Accumulate in first-encounter order; K is small, linear search wins
    // over hashing here and keeps tie-breaking deterministic.
    let mut stats: Vec<(&str, f32, usize)> = Vec::new();
    for sample in ranked {
        match stats
            .iter()
            .position(|(category, _, _)| *category == sample.category)
        {
            Some(i) => {
                stats[i].1 += sample.score;
                stats[i].2 += 1;
            }
            None => stats.push((sample.category.as_str(), sample.score, 1)),
        }
    }

    let mut best: Option<&str> = None;
    let mut best_mean = f32::NEG_INFINITY;
    for (category, sum, count) in stats {
        let mean = sum / count as f32;
        if mean > best_mean {
            best_mean = mean;
            best = Some(category);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(entries: &[(&str, f32)]) -> Vec<RankedSample> {
        entries
            .iter()
            .enumerate()
            .map(|(i, (category, score))| RankedSample {
                text: format!("neighbor-{i}"),
                category: category.to_string(),
                embedding: vec![1.0],
                score: *score,
            })
            .collect()
    }

    #[test]
    fn empty_input_resolves_to_none_in_both_modes() {
        assert_eq!(resolve(&[], VoteStrategy::Majority), None);
        assert_eq!(resolve(&[], VoteStrategy::Weighted), None);
    }

    #[test]
    fn majority_picks_the_most_frequent() {
        let ranked = ranked(&[("a", 0.9), ("b", 0.8), ("b", 0.7)]);
        assert_eq!(resolve(&ranked, VoteStrategy::Majority), Some("b"));
    }

    #[test]
    fn majority_tie_favors_whoever_reached_the_count_first() {
        // Both end on two votes, but "b" is first to reach two.
        let tied = ranked(&[("a", 0.9), ("b", 0.8), ("b", 0.7), ("a", 0.6)]);
        assert_eq!(resolve(&tied, VoteStrategy::Majority), Some("b"));

        // One vote each; "a" reached the maximum first in rank order.
        let tied = ranked(&[("a", 0.9), ("b", 0.8)]);
        assert_eq!(resolve(&tied, VoteStrategy::Majority), Some("a"));
    }

    #[test]
    fn weighted_uses_the_mean_not_the_sum() {
        // mean(b) = 0.51 < 0.9 = mean(a), even though sum(b) > sum(a).
        let ranked = ranked(&[("a", 0.9), ("b", 0.5), ("b", 0.52)]);
        assert_eq!(resolve(&ranked, VoteStrategy::Weighted), Some("a"));
    }

    #[test]
    fn weighted_tie_favors_the_first_encountered() {
        let ranked = ranked(&[("a", 0.8), ("b", 0.8)]);
        assert_eq!(resolve(&ranked, VoteStrategy::Weighted), Some("a"));
    }

    #[test]
    fn weighted_handles_negative_scores() {
        let ranked = ranked(&[("a", -0.2), ("b", -0.6)]);
        assert_eq!(resolve(&ranked, VoteStrategy::Weighted), Some("a"));
    }

    #[test]
    fn single_candidate_wins_in_both_modes() {
        let ranked = ranked(&[("only", 0.4)]);
        assert_eq!(resolve(&ranked, VoteStrategy::Majority), Some("only"));
        assert_eq!(resolve(&ranked, VoteStrategy::Weighted), Some("only"));
    }

    #[test]
    fn strategy_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&VoteStrategy::Majority).expect("serialize"),
            "\"majority\""
        );
        let parsed: VoteStrategy = serde_json::from_str("\"weighted\"").expect("parse");
        assert_eq!(parsed, VoteStrategy::Weighted);
    }
}
