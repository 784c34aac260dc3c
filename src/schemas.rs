use std::sync::Arc;

use common::{
    AvoidEntry, BadgeVariant, BasicPanel, DailyReturnPoint, HorizonPoint, MarketAnalysis,
    MarketOverview,
    MarketStatistics, PerformanceRating, ProbabilityAggregates, ProbabilityPanel,
    RatingDistribution, RecommendationsView, RiskAggregates, RiskDistribution, RiskLevel,
    RiskPanel, ScatterPoint, ScorePanel, SentimentSlice, SignalDistribution, StockDetail,
    StockRow, StockTrend, SummaryStats, TechnicalPanel, TopRecommendation, TrainingPoint,
    TrendAggregates, TrendIcon,
};
use compute::{SortKey, SortOrder};
use model::{PredictionDocument, SummaryDocument};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use utoipa::{OpenApi, ToSchema};

pub use common::ApiResponse;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Prediction documents, absent until the initial load finishes
    pub documents: Arc<RwLock<Documents>>,
    /// Base location of the upstream JSON documents (http(s) URL or
    /// filesystem directory)
    pub data_base: String,
}

impl AppState {
    pub fn new(data_base: String) -> Self {
        Self {
            documents: Arc::new(RwLock::new(Documents::default())),
            data_base,
        }
    }

    pub async fn prediction(&self) -> Option<Arc<PredictionDocument>> {
        self.documents.read().await.prediction.clone()
    }

    pub async fn summary(&self) -> Option<Arc<SummaryDocument>> {
        self.documents.read().await.summary.clone()
    }
}

/// The loaded documents. Both are immutable once installed; handlers clone
/// the Arcs out of the lock and never hold it across a derivation.
#[derive(Debug, Default)]
pub struct Documents {
    pub prediction: Option<Arc<PredictionDocument>>,
    pub summary: Option<Arc<SummaryDocument>>,
}

/// Query parameters for the stock table endpoint
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct StocksQuery {
    /// Case-insensitive substring filter on the ticker symbol
    pub search: Option<String>,
    /// Sort column (prediction, volatility, confidence, cumulative,
    /// last_return)
    pub sort_by: Option<SortKey>,
    /// Sort direction (asc, desc)
    pub order: Option<SortOrder>,
}

/// Query parameters for endpoints that only filter
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SearchQuery {
    /// Case-insensitive substring filter on the ticker symbol
    pub search: Option<String>,
}

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Prediction-data load status
    pub data: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::overview::get_market_overview,
        crate::handlers::stocks::get_stocks,
        crate::handlers::stocks::get_stock,
        crate::handlers::stocks::get_stock_trend,
        crate::handlers::stocks::get_top_performers,
        crate::handlers::charts::get_sentiment,
        crate::handlers::charts::get_risk_return,
        crate::handlers::analysis::get_market_analysis,
        crate::handlers::training::get_training_history,
        crate::handlers::recommendations::get_recommendations,
    ),
    components(
        schemas(
            ApiResponse<MarketOverview>,
            ApiResponse<Vec<StockRow>>,
            ApiResponse<StockDetail>,
            ApiResponse<StockTrend>,
            ApiResponse<Vec<SentimentSlice>>,
            ApiResponse<Vec<ScatterPoint>>,
            ApiResponse<MarketAnalysis>,
            ApiResponse<Vec<TrainingPoint>>,
            ApiResponse<RecommendationsView>,
            ErrorResponse,
            HealthResponse,
            StocksQuery,
            SearchQuery,
            SortKey,
            SortOrder,
            MarketOverview,
            StockRow,
            StockDetail,
            BasicPanel,
            RiskPanel,
            TechnicalPanel,
            ProbabilityPanel,
            ScorePanel,
            StockTrend,
            HorizonPoint,
            DailyReturnPoint,
            ScatterPoint,
            SentimentSlice,
            SignalDistribution,
            RiskDistribution,
            RiskAggregates,
            ProbabilityAggregates,
            TrendAggregates,
            MarketStatistics,
            MarketAnalysis,
            TrainingPoint,
            RecommendationsView,
            SummaryStats,
            RatingDistribution,
            TopRecommendation,
            AvoidEntry,
            BadgeVariant,
            RiskLevel,
            PerformanceRating,
            TrendIcon,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "overview", description = "Market overview endpoints"),
        (name = "stocks", description = "Per-stock prediction endpoints"),
        (name = "charts", description = "Chart data endpoints"),
        (name = "analysis", description = "Market analysis endpoints"),
        (name = "recommendations", description = "AI recommendation endpoints"),
    ),
    info(
        title = "Predash API",
        description = "Stock Prediction Dashboard API - serves model predictions, risk metrics and recommendations",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
