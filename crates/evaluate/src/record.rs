use serde::{Deserialize, Serialize};

/// One held-out probe's outcome: what the classifier said next to what the
/// label says. Input to metrics aggregation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationRecord {
    pub text: String,
    /// Predicted category, or the unresolved placeholder when no neighbor
    /// cleared the threshold.
    pub predicted_category: String,
    pub actual_category: String,
    /// Top-1 neighbor similarity, 0.0 when there were no neighbors.
    pub confidence: f32,
}

/// A bare prediction for the pairwise aggregation contract, where the
/// prediction and the ground-truth label arrive as separate sequences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryPrediction {
    pub category: String,
    pub confidence: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serde_round_trip() {
        let record = EvaluationRecord {
            text: "slow checkout".into(),
            predicted_category: "performance".into(),
            actual_category: "performance".into(),
            confidence: 0.83,
        };
        let json = serde_json::to_string(&record).expect("serialize");
        let back: EvaluationRecord = serde_json::from_str(&json).expect("parse");
        assert_eq!(record, back);
    }
}
