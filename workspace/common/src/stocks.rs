use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::presentation::{BadgeVariant, PerformanceRating, RiskLevel, TrendIcon};

/// One row of the multi-horizon prediction table.
///
/// Ratios are already defaulted (missing → 0) and scores likewise
/// (missing → 50); categorical fields carry the upstream label or `UNKNOWN`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StockRow {
    pub symbol: String,
    pub expected_return_1d: f64,
    pub expected_return_3d: f64,
    pub expected_return_5d: f64,
    pub expected_return_7d: f64,
    pub cumulative_return_7d: f64,
    pub last_known_return: f64,
    pub composite_score: f64,
    pub rating: PerformanceRating,
    pub rating_badge: BadgeVariant,
    pub sharpe_ratio_7d: f64,
    pub volatility_7d: f64,
    pub risk_level: RiskLevel,
    pub signal: String,
    pub signal_badge: BadgeVariant,
    pub trend_strength: f64,
    pub trend_icon: TrendIcon,
    /// Data points backing this prediction, when reported
    pub data_points: Option<u64>,
}

/// Basic-info panel of the deep-analysis view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BasicPanel {
    pub prediction_date: Option<String>,
    pub data_points: Option<u64>,
    pub feature_dimension: Option<u64>,
    pub last_known_return: f64,
}

/// Risk-management panel of the deep-analysis view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RiskPanel {
    pub volatility_7d: f64,
    pub volatility_20d: f64,
    pub var_95_7d: f64,
    pub var_99_7d: f64,
    pub sharpe_ratio_7d: f64,
    pub max_drawdown_7d: f64,
}

/// Technical/trend panel of the deep-analysis view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TechnicalPanel {
    pub signal: String,
    pub signal_badge: BadgeVariant,
    pub trend: String,
    pub trend_badge: BadgeVariant,
    pub trend_strength: f64,
    pub trend_consistency: f64,
    pub momentum_5d: f64,
    pub trend_change_vs_history: String,
}

/// Probability panel of the deep-analysis view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProbabilityPanel {
    pub prob_positive_7d: f64,
    pub prob_gain_5pct_7d: f64,
    pub prob_outperform_market_7d: f64,
}

/// Score-breakdown panel of the deep-analysis view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScorePanel {
    pub composite_score: f64,
    pub return_score: f64,
    pub risk_score: f64,
    pub sharpe_score: f64,
    pub probability_score: f64,
    pub trend_score: f64,
    pub technical_score: f64,
}

/// Full deep-analysis view for one ticker.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StockDetail {
    pub symbol: String,
    pub basic: BasicPanel,
    pub risk: RiskPanel,
    pub technical: TechnicalPanel,
    pub probabilities: ProbabilityPanel,
    pub scores: ScorePanel,
}

/// One point of the per-horizon trend line, pre-scaled to percent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HorizonPoint {
    /// Horizon label as emitted upstream ("1d", "3d", "5d", "7d")
    pub horizon: String,
    pub days: u32,
    pub expected_pct: f64,
    pub cumulative_pct: f64,
}

/// One point of the 7-day daily-return series with running cumulative sum,
/// pre-scaled to percent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DailyReturnPoint {
    /// 1-based day index
    pub day: u32,
    pub return_pct: f64,
    pub cumulative_pct: f64,
}

/// Trend-chart payload for one ticker.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StockTrend {
    pub symbol: String,
    pub horizons: Vec<HorizonPoint>,
    pub daily_returns: Vec<DailyReturnPoint>,
}

/// Risk/return scatter point, pre-scaled to percent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScatterPoint {
    pub symbol: String,
    pub risk_pct: f64,
    pub return_pct: f64,
    /// Composite score backing the point (missing → 0 here, matching the
    /// original scatter view rather than the table default)
    pub confidence: f64,
}
