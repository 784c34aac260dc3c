use crate::handlers::{
    analysis::get_market_analysis,
    charts::{get_risk_return, get_sentiment},
    health::health_check,
    overview::get_market_overview,
    recommendations::get_recommendations,
    stocks::{get_stock, get_stock_trend, get_stocks, get_top_performers},
    training::get_training_history,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{Router, routing::get};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Overview
        .route("/api/v1/overview", get(get_market_overview))
        // Stock table and per-ticker views
        .route("/api/v1/stocks", get(get_stocks))
        .route("/api/v1/stocks/:symbol", get(get_stock))
        .route("/api/v1/stocks/:symbol/trend", get(get_stock_trend))
        .route("/api/v1/top-performers", get(get_top_performers))
        // Chart data
        .route("/api/v1/sentiment", get(get_sentiment))
        .route("/api/v1/risk-return", get(get_risk_return))
        // Market analysis
        .route("/api/v1/analysis", get(get_market_analysis))
        .route("/api/v1/training-history", get(get_training_history))
        // Recommendations
        .route("/api/v1/recommendations", get(get_recommendations))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
