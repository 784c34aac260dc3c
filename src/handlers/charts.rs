use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use common::{ScatterPoint, SentimentSlice};
use tracing::instrument;

use crate::schemas::{ApiResponse, AppState, SearchQuery};

/// Get the market-sentiment pie slices
#[utoipa::path(
    get,
    path = "/api/v1/sentiment",
    tag = "charts",
    responses(
        (status = 200, description = "Sentiment distribution retrieved successfully", body = ApiResponse<Vec<SentimentSlice>>),
        (status = 503, description = "Prediction data not loaded yet", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_sentiment(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SentimentSlice>>>, StatusCode> {
    let doc = state
        .prediction()
        .await
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let response = ApiResponse {
        data: compute::sentiment_distribution(&doc),
        message: "Sentiment distribution retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Get the risk/return scatter points
#[utoipa::path(
    get,
    path = "/api/v1/risk-return",
    tag = "charts",
    responses(
        (status = 200, description = "Risk/return points retrieved successfully", body = ApiResponse<Vec<ScatterPoint>>),
        (status = 503, description = "Prediction data not loaded yet", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_risk_return(
    Query(query): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ScatterPoint>>>, StatusCode> {
    let doc = state
        .prediction()
        .await
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let search = query.search.unwrap_or_default();
    let response = ApiResponse {
        data: compute::risk_return_points(&doc, &search),
        message: "Risk/return points retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
