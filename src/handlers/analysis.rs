use axum::{extract::State, http::StatusCode, response::Json};
use common::MarketAnalysis;
use tracing::instrument;

use crate::schemas::{ApiResponse, AppState};

/// Get the intelligent-analysis aggregates
#[utoipa::path(
    get,
    path = "/api/v1/analysis",
    tag = "analysis",
    responses(
        (status = 200, description = "Market analysis retrieved successfully", body = ApiResponse<MarketAnalysis>),
        (status = 503, description = "Prediction data not loaded yet", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_market_analysis(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<MarketAnalysis>>, StatusCode> {
    let doc = state
        .prediction()
        .await
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let response = ApiResponse {
        data: compute::market_analysis(&doc),
        message: "Market analysis retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
