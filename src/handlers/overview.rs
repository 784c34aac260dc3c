use axum::{extract::State, http::StatusCode, response::Json};
use common::MarketOverview;
use tracing::instrument;

use crate::schemas::{ApiResponse, AppState};

/// Get the market-overview stat tiles
#[utoipa::path(
    get,
    path = "/api/v1/overview",
    tag = "overview",
    responses(
        (status = 200, description = "Market overview retrieved successfully", body = ApiResponse<MarketOverview>),
        (status = 503, description = "Prediction data not loaded yet", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_market_overview(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<MarketOverview>>, StatusCode> {
    let doc = state
        .prediction()
        .await
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let response = ApiResponse {
        data: compute::market_overview(&doc),
        message: "Market overview retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
