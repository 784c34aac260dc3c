use axum::{extract::State, http::StatusCode, response::Json};
use common::TrainingPoint;
use tracing::instrument;

use crate::schemas::{ApiResponse, AppState};

/// Get the model training-loss series
#[utoipa::path(
    get,
    path = "/api/v1/training-history",
    tag = "analysis",
    responses(
        (status = 200, description = "Training history retrieved successfully", body = ApiResponse<Vec<TrainingPoint>>),
        (status = 404, description = "Document carries no training history", body = ErrorResponse),
        (status = 503, description = "Prediction data not loaded yet", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_training_history(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TrainingPoint>>>, StatusCode> {
    let doc = state
        .prediction()
        .await
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let points = compute::training_points(&doc).ok_or(StatusCode::NOT_FOUND)?;
    let response = ApiResponse {
        data: points,
        message: "Training history retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
