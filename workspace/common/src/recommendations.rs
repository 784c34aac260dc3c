use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::format::{DEFAULT_DECIMALS, format_percentage, format_score};

/// Counts per AI rating bucket from the summary document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RatingDistribution {
    pub strong_buy: u64,
    pub buy: u64,
    pub hold: u64,
    pub sell: u64,
    pub strong_sell: u64,
}

/// Aggregate statistics of the recommendation run.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SummaryStats {
    pub total_stocks_analyzed: u64,
    pub successful_predictions: u64,
    /// Share of successful predictions, rendered the way the header badge
    /// shows it ("100%" when everything succeeded)
    pub success_rate_display: String,
    pub average_composite_score: Option<f64>,
    pub average_composite_score_display: String,
    pub top_score: Option<f64>,
    pub top_score_display: String,
    pub rating_distribution: RatingDistribution,
}

impl SummaryStats {
    pub fn new(
        total_stocks_analyzed: u64,
        successful_predictions: u64,
        average_composite_score: Option<f64>,
        top_score: Option<f64>,
        rating_distribution: RatingDistribution,
    ) -> Self {
        let success_rate_display = if successful_predictions == total_stocks_analyzed {
            "100%".to_string()
        } else {
            let rate = successful_predictions as f64 / total_stocks_analyzed as f64 * 100.0;
            if rate.is_finite() {
                format!("{rate:.1}%")
            } else {
                "N/A".to_string()
            }
        };
        Self {
            total_stocks_analyzed,
            successful_predictions,
            success_rate_display,
            average_composite_score,
            average_composite_score_display: format_score(average_composite_score, DEFAULT_DECIMALS),
            top_score,
            top_score_display: format_score(top_score, DEFAULT_DECIMALS),
            rating_distribution,
        }
    }
}

/// One entry of the top-recommendation list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopRecommendation {
    pub symbol: String,
    pub score: Option<f64>,
    pub score_display: String,
    pub expected_7d_return: Option<f64>,
    pub expected_7d_return_display: String,
    pub risk_level: String,
}

impl TopRecommendation {
    pub fn new(
        symbol: String,
        score: Option<f64>,
        expected_7d_return: Option<f64>,
        risk_level: String,
    ) -> Self {
        Self {
            symbol,
            score,
            score_display: format_score(score, DEFAULT_DECIMALS),
            expected_7d_return,
            expected_7d_return_display: format_percentage(expected_7d_return, DEFAULT_DECIMALS),
            risk_level,
        }
    }
}

/// One entry of the avoid list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AvoidEntry {
    pub symbol: String,
    pub score: Option<f64>,
    pub score_display: String,
    pub reason: String,
}

impl AvoidEntry {
    pub fn new(symbol: String, score: Option<f64>, reason: String) -> Self {
        Self {
            symbol,
            score,
            score_display: format_score(score, DEFAULT_DECIMALS),
            reason,
        }
    }
}

/// Full payload of the AI-recommendations tab.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecommendationsView {
    pub summary: Option<SummaryStats>,
    pub top_recommendations: Vec<TopRecommendation>,
    pub avoid_list: Vec<AvoidEntry>,
}
