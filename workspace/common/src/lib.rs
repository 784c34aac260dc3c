//! Common transport-layer types shared between the backend handlers and any
//! client of the dashboard API. These structs mirror exactly what the
//! handlers serialize so a client can deserialize responses without
//! duplicating shapes, and they carry the display-formatting policy for
//! every numeric the dashboard renders.

pub mod format;

mod analysis;
mod overview;
mod presentation;
mod recommendations;
mod stocks;

pub use analysis::{
    MarketAnalysis, MarketStatistics, ProbabilityAggregates, RiskAggregates, RiskDistribution,
    SentimentSlice, SignalDistribution, TrainingPoint, TrendAggregates,
};
pub use overview::MarketOverview;
pub use presentation::{BadgeVariant, PerformanceRating, RiskLevel, TrendIcon};
pub use recommendations::{
    AvoidEntry, RatingDistribution, RecommendationsView, SummaryStats, TopRecommendation,
};
pub use stocks::{
    BasicPanel, DailyReturnPoint, HorizonPoint, ProbabilityPanel, RiskPanel, ScatterPoint,
    ScorePanel, StockDetail, StockRow, StockTrend, TechnicalPanel,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}
