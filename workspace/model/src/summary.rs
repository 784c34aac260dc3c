use std::collections::BTreeMap;

use serde::Deserialize;

/// Aggregate statistics of the recommendation run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryStats {
    #[serde(default)]
    pub total_stocks_analyzed: Option<u64>,
    #[serde(default)]
    pub successful_predictions: Option<u64>,
    #[serde(default)]
    pub average_composite_score: Option<f64>,
    #[serde(default)]
    pub top_score: Option<f64>,
    /// Counts keyed by rating label (STRONG_BUY, BUY, HOLD, SELL,
    /// STRONG_SELL); unexpected labels are carried through untouched.
    #[serde(default)]
    pub rating_distribution: BTreeMap<String, u64>,
}

impl SummaryStats {
    pub fn rating_count(&self, label: &str) -> u64 {
        self.rating_distribution.get(label).copied().unwrap_or(0)
    }
}

/// One ticker of the top-recommendation list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub expected_7d_return: Option<f64>,
    #[serde(default)]
    pub risk_level: Option<String>,
}

/// One ticker of the avoid list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvoidReason {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// The secondary summary document (`future_summary.json`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryDocument {
    #[serde(default)]
    pub summary: Option<SummaryStats>,
    #[serde(default)]
    pub top_recommendations: BTreeMap<String, Recommendation>,
    #[serde(default)]
    pub avoid_list: BTreeMap<String, AvoidReason>,
}
