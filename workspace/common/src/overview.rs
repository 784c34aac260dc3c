use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::format::{DEFAULT_DECIMALS, format_number, format_percentage, format_score};

/// Market-overview stat tiles: one aggregate per tile, carried both as the
/// raw value (for charts) and the formatted display string (for the tile).
///
/// Averages are taken over ALL tickers, with missing fields defaulted before
/// summing, so the divisor is always the total ticker count. An empty
/// document yields NaN averages, which serialize as null and display as N/A.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarketOverview {
    /// Number of tickers in the document
    pub stock_count: usize,
    /// Prediction date (date part of the metadata timestamp)
    pub prediction_date: Option<String>,
    /// Feature vector width reported by the first ticker
    pub feature_dimension: Option<u64>,
    /// Model training epochs from the document metadata
    pub model_epochs: Option<f64>,
    pub model_epochs_display: String,
    /// Mean expected 7-day return
    pub avg_expected_return_7d: f64,
    pub avg_expected_return_7d_display: String,
    /// Mean 7-day volatility
    pub avg_volatility_7d: f64,
    pub avg_volatility_7d_display: String,
    /// Mean composite selection score (missing scores count as 50)
    pub avg_composite_score: f64,
    pub avg_composite_score_display: String,
    /// Mean 7-day Sharpe ratio
    pub avg_sharpe_ratio_7d: f64,
    pub avg_sharpe_ratio_7d_display: String,
}

impl MarketOverview {
    /// Attaches the display strings for a set of raw aggregates.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        stock_count: usize,
        prediction_date: Option<String>,
        feature_dimension: Option<u64>,
        model_epochs: Option<f64>,
        avg_expected_return_7d: f64,
        avg_volatility_7d: f64,
        avg_composite_score: f64,
        avg_sharpe_ratio_7d: f64,
    ) -> Self {
        Self {
            stock_count,
            prediction_date,
            feature_dimension,
            model_epochs,
            model_epochs_display: format_number(model_epochs, 1),
            avg_expected_return_7d,
            avg_expected_return_7d_display: format_percentage(
                Some(avg_expected_return_7d),
                DEFAULT_DECIMALS,
            ),
            avg_volatility_7d,
            avg_volatility_7d_display: format_percentage(Some(avg_volatility_7d), 4),
            avg_composite_score,
            avg_composite_score_display: format_score(Some(avg_composite_score), DEFAULT_DECIMALS),
            avg_sharpe_ratio_7d,
            avg_sharpe_ratio_7d_display: format_number(Some(avg_sharpe_ratio_7d), 2),
        }
    }
}
