use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::defaults;

/// Prediction horizons emitted by the producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Horizon {
    #[serde(rename = "1d")]
    D1,
    #[serde(rename = "3d")]
    D3,
    #[serde(rename = "5d")]
    D5,
    #[serde(rename = "7d")]
    D7,
}

impl Horizon {
    pub const ALL: [Horizon; 4] = [Horizon::D1, Horizon::D3, Horizon::D5, Horizon::D7];

    pub fn label(self) -> &'static str {
        match self {
            Horizon::D1 => "1d",
            Horizon::D3 => "3d",
            Horizon::D5 => "5d",
            Horizon::D7 => "7d",
        }
    }

    pub fn days(self) -> u32 {
        match self {
            Horizon::D1 => 1,
            Horizon::D3 => 3,
            Horizon::D5 => 5,
            Horizon::D7 => 7,
        }
    }
}

/// Technical signal predicted for a ticker. Unexpected labels degrade to
/// `Unknown` instead of failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Signal {
    pub fn label(self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
            Signal::Unknown => defaults::LABEL,
        }
    }
}

/// Predicted trend direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Uptrend,
    Downtrend,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Uptrend => "UPTREND",
            Trend::Downtrend => "DOWNTREND",
            Trend::Unknown => defaults::LABEL,
        }
    }
}

/// Trend change relative to the ticker's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendChange {
    Improving,
    Deteriorating,
    Stable,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TrendChange {
    pub fn label(self) -> &'static str {
        match self {
            TrendChange::Improving => "IMPROVING",
            TrendChange::Deteriorating => "DETERIORATING",
            TrendChange::Stable => "STABLE",
            TrendChange::Unknown => defaults::LABEL,
        }
    }
}

/// Document-level metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub prediction_date: Option<String>,
    #[serde(default)]
    pub model_epochs: Option<f64>,
}

/// Per-ticker basics reported by the producer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BasicInfo {
    #[serde(default)]
    pub prediction_date: Option<String>,
    #[serde(default)]
    pub data_points: Option<u64>,
    #[serde(default)]
    pub feature_dimension: Option<u64>,
    #[serde(default)]
    pub last_known_return: Option<f64>,
}

/// Expected and cumulative return for one horizon, plus the daily breakdown.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HorizonReturn {
    #[serde(default)]
    pub expected_return: Option<f64>,
    #[serde(default)]
    pub cumulative_return: Option<f64>,
    #[serde(default)]
    pub daily_returns: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskMetrics {
    #[serde(default)]
    pub volatility_7d: Option<f64>,
    #[serde(default)]
    pub volatility_20d: Option<f64>,
    #[serde(default)]
    pub var_95_7d: Option<f64>,
    #[serde(default)]
    pub var_99_7d: Option<f64>,
    #[serde(default)]
    pub sharpe_ratio_7d: Option<f64>,
    #[serde(default)]
    pub max_drawdown_7d: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionScores {
    #[serde(default)]
    pub composite_score: Option<f64>,
    #[serde(default)]
    pub return_score: Option<f64>,
    #[serde(default)]
    pub risk_score: Option<f64>,
    #[serde(default)]
    pub sharpe_score: Option<f64>,
    #[serde(default)]
    pub probability_score: Option<f64>,
    #[serde(default)]
    pub trend_score: Option<f64>,
    #[serde(default)]
    pub technical_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TechnicalSignals {
    #[serde(default)]
    pub predicted_signal: Option<Signal>,
    #[serde(default)]
    pub momentum_5d: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendAnalysis {
    #[serde(default)]
    pub predicted_trend: Option<Trend>,
    #[serde(default)]
    pub trend_strength: Option<f64>,
    #[serde(default)]
    pub trend_consistency: Option<f64>,
    #[serde(default)]
    pub trend_change_vs_history: Option<TrendChange>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbabilityDistributions {
    #[serde(default)]
    pub prob_positive_7d: Option<f64>,
    #[serde(default)]
    pub prob_gain_5pct_7d: Option<f64>,
    #[serde(default)]
    pub prob_outperform_market_7d: Option<f64>,
}

/// Training/validation loss per epoch; the two sequences are parallel but
/// the producer may truncate either.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainingHistory {
    #[serde(default)]
    pub train: Vec<Option<f64>>,
    #[serde(default)]
    pub valid: Vec<Option<f64>>,
}

/// Everything the producer predicted for one ticker.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockPrediction {
    #[serde(default)]
    pub basic_info: Option<BasicInfo>,
    #[serde(default)]
    pub multi_horizon_returns: BTreeMap<String, HorizonReturn>,
    #[serde(default)]
    pub risk_metrics: Option<RiskMetrics>,
    #[serde(default)]
    pub selection_scores: Option<SelectionScores>,
    #[serde(default)]
    pub technical_signals: Option<TechnicalSignals>,
    #[serde(default)]
    pub trend_analysis: Option<TrendAnalysis>,
    #[serde(default)]
    pub probability_distributions: Option<ProbabilityDistributions>,
}

impl StockPrediction {
    fn horizon(&self, horizon: Horizon) -> Option<&HorizonReturn> {
        self.multi_horizon_returns.get(horizon.label())
    }

    pub fn expected_return(&self, horizon: Horizon) -> f64 {
        defaults::ratio(self.horizon(horizon).and_then(|h| h.expected_return))
    }

    pub fn cumulative_return(&self, horizon: Horizon) -> f64 {
        defaults::ratio(self.horizon(horizon).and_then(|h| h.cumulative_return))
    }

    /// 7-day daily-return sequence with missing entries resolved to 0.
    pub fn daily_returns_7d(&self) -> Vec<f64> {
        self.horizon(Horizon::D7)
            .map(|h| h.daily_returns.iter().map(|r| defaults::ratio(*r)).collect())
            .unwrap_or_default()
    }

    pub fn last_known_return(&self) -> f64 {
        defaults::ratio(self.basic_info.as_ref().and_then(|b| b.last_known_return))
    }

    pub fn data_points(&self) -> Option<u64> {
        self.basic_info.as_ref().and_then(|b| b.data_points)
    }

    pub fn feature_dimension(&self) -> Option<u64> {
        self.basic_info.as_ref().and_then(|b| b.feature_dimension)
    }

    pub fn volatility_7d(&self) -> f64 {
        defaults::ratio(self.risk_metrics.as_ref().and_then(|r| r.volatility_7d))
    }

    pub fn volatility_20d(&self) -> f64 {
        defaults::ratio(self.risk_metrics.as_ref().and_then(|r| r.volatility_20d))
    }

    pub fn var_95_7d(&self) -> f64 {
        defaults::ratio(self.risk_metrics.as_ref().and_then(|r| r.var_95_7d))
    }

    pub fn var_99_7d(&self) -> f64 {
        defaults::ratio(self.risk_metrics.as_ref().and_then(|r| r.var_99_7d))
    }

    pub fn sharpe_ratio_7d(&self) -> f64 {
        defaults::ratio(self.risk_metrics.as_ref().and_then(|r| r.sharpe_ratio_7d))
    }

    pub fn max_drawdown_7d(&self) -> f64 {
        defaults::ratio(self.risk_metrics.as_ref().and_then(|r| r.max_drawdown_7d))
    }

    pub fn composite_score(&self) -> f64 {
        defaults::score(self.selection_scores.as_ref().and_then(|s| s.composite_score))
    }

    /// Composite score with the scatter-view fallback (missing → 0 rather
    /// than the neutral 50 the table uses).
    pub fn composite_score_or_zero(&self) -> f64 {
        defaults::ratio(self.selection_scores.as_ref().and_then(|s| s.composite_score))
    }

    pub fn signal(&self) -> Signal {
        self.technical_signals
            .as_ref()
            .and_then(|t| t.predicted_signal)
            .unwrap_or_default()
    }

    pub fn momentum_5d(&self) -> f64 {
        defaults::ratio(self.technical_signals.as_ref().and_then(|t| t.momentum_5d))
    }

    pub fn trend(&self) -> Trend {
        self.trend_analysis
            .as_ref()
            .and_then(|t| t.predicted_trend)
            .unwrap_or_default()
    }

    pub fn trend_strength(&self) -> f64 {
        defaults::ratio(self.trend_analysis.as_ref().and_then(|t| t.trend_strength))
    }

    pub fn trend_consistency(&self) -> f64 {
        defaults::ratio(self.trend_analysis.as_ref().and_then(|t| t.trend_consistency))
    }

    pub fn trend_change_vs_history(&self) -> TrendChange {
        self.trend_analysis
            .as_ref()
            .and_then(|t| t.trend_change_vs_history)
            .unwrap_or_default()
    }

    pub fn prob_positive_7d(&self) -> f64 {
        defaults::ratio(
            self.probability_distributions
                .as_ref()
                .and_then(|p| p.prob_positive_7d),
        )
    }

    pub fn prob_gain_5pct_7d(&self) -> f64 {
        defaults::ratio(
            self.probability_distributions
                .as_ref()
                .and_then(|p| p.prob_gain_5pct_7d),
        )
    }

    pub fn prob_outperform_market_7d(&self) -> f64 {
        defaults::ratio(
            self.probability_distributions
                .as_ref()
                .and_then(|p| p.prob_outperform_market_7d),
        )
    }
}

/// The primary prediction document (`future.json`), immutable after load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionDocument {
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub comprehensive_predictions: BTreeMap<String, StockPrediction>,
    #[serde(default)]
    pub training_history: Option<TrainingHistory>,
}

impl PredictionDocument {
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.comprehensive_predictions.keys().map(String::as_str)
    }

    pub fn stocks(&self) -> impl Iterator<Item = (&str, &StockPrediction)> {
        self.comprehensive_predictions
            .iter()
            .map(|(symbol, stock)| (symbol.as_str(), stock))
    }

    pub fn stock(&self, symbol: &str) -> Option<&StockPrediction> {
        self.comprehensive_predictions.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.comprehensive_predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comprehensive_predictions.is_empty()
    }

    /// Date part of the metadata timestamp, if it parses as ISO-8601.
    pub fn prediction_date(&self) -> Option<NaiveDate> {
        let raw = self.metadata.as_ref()?.prediction_date.as_deref()?;
        let date_part = raw.split('T').next().unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    pub fn model_epochs(&self) -> Option<f64> {
        self.metadata.as_ref()?.model_epochs
    }

    /// Feature-vector width, read from the first ticker that reports one.
    pub fn feature_dimension(&self) -> Option<u64> {
        self.comprehensive_predictions
            .values()
            .find_map(StockPrediction::feature_dimension)
    }
}
