use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::format::{DEFAULT_DECIMALS, format_number, format_percentage};

/// One slice of the market-sentiment pie.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SentimentSlice {
    /// Bucket name: "bullish", "bearish" or "neutral"
    pub name: String,
    /// Tickers in the bucket
    pub count: usize,
    /// Rounded share of all tickers, in whole percent (NaN → null when the
    /// document is empty)
    pub percent: f64,
}

/// BUY/SELL/HOLD counts across the document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignalDistribution {
    pub buy: usize,
    pub sell: usize,
    pub hold: usize,
}

/// Ticker counts per risk level.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RiskDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub minimal: usize,
}

/// Mean risk metrics across all tickers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RiskAggregates {
    pub avg_volatility_7d: f64,
    pub avg_volatility_7d_display: String,
    pub avg_sharpe_ratio_7d: f64,
    pub avg_sharpe_ratio_7d_display: String,
    pub avg_max_drawdown_7d: f64,
    pub avg_max_drawdown_7d_display: String,
}

impl RiskAggregates {
    pub fn new(avg_volatility_7d: f64, avg_sharpe_ratio_7d: f64, avg_max_drawdown_7d: f64) -> Self {
        Self {
            avg_volatility_7d,
            avg_volatility_7d_display: format_percentage(Some(avg_volatility_7d), DEFAULT_DECIMALS),
            avg_sharpe_ratio_7d,
            avg_sharpe_ratio_7d_display: format_number(Some(avg_sharpe_ratio_7d), 2),
            avg_max_drawdown_7d,
            avg_max_drawdown_7d_display: format_percentage(
                Some(avg_max_drawdown_7d),
                DEFAULT_DECIMALS,
            ),
        }
    }
}

/// Mean probability predictions across all tickers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProbabilityAggregates {
    pub avg_prob_positive_7d: f64,
    pub avg_prob_positive_7d_display: String,
    pub avg_prob_gain_5pct_7d: f64,
    pub avg_prob_gain_5pct_7d_display: String,
    pub avg_prob_outperform_market_7d: f64,
    pub avg_prob_outperform_market_7d_display: String,
}

impl ProbabilityAggregates {
    pub fn new(
        avg_prob_positive_7d: f64,
        avg_prob_gain_5pct_7d: f64,
        avg_prob_outperform_market_7d: f64,
    ) -> Self {
        Self {
            avg_prob_positive_7d,
            avg_prob_positive_7d_display: format_percentage(
                Some(avg_prob_positive_7d),
                DEFAULT_DECIMALS,
            ),
            avg_prob_gain_5pct_7d,
            avg_prob_gain_5pct_7d_display: format_percentage(
                Some(avg_prob_gain_5pct_7d),
                DEFAULT_DECIMALS,
            ),
            avg_prob_outperform_market_7d,
            avg_prob_outperform_market_7d_display: format_percentage(
                Some(avg_prob_outperform_market_7d),
                DEFAULT_DECIMALS,
            ),
        }
    }
}

/// Trend direction counts and mean consistency.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrendAggregates {
    pub uptrends: usize,
    pub downtrends: usize,
    pub avg_trend_consistency: f64,
    pub avg_trend_consistency_display: String,
}

impl TrendAggregates {
    pub fn new(uptrends: usize, downtrends: usize, avg_trend_consistency: f64) -> Self {
        Self {
            uptrends,
            downtrends,
            avg_trend_consistency,
            avg_trend_consistency_display: format_percentage(
                Some(avg_trend_consistency),
                DEFAULT_DECIMALS,
            ),
        }
    }
}

/// Whole-market statistics shown in the deep-analysis tab.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarketStatistics {
    pub total_stocks: usize,
    pub avg_expected_return_7d: f64,
    pub avg_volatility_7d: f64,
    pub min_expected_return_7d: f64,
    pub max_expected_return_7d: f64,
}

/// Everything the intelligent-analysis tab aggregates, in one payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarketAnalysis {
    pub signals: SignalDistribution,
    pub risk: RiskAggregates,
    pub probabilities: ProbabilityAggregates,
    pub trends: TrendAggregates,
    pub risk_distribution: RiskDistribution,
    pub statistics: MarketStatistics,
}

/// One epoch of the model training history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingPoint {
    /// 1-based epoch index
    pub epoch: usize,
    pub train_loss: f64,
    /// Missing validation entries default to 0, matching the chart source
    pub valid_loss: f64,
}
