use axum::{extract::State, http::StatusCode, response::Json};
use common::RecommendationsView;
use tracing::instrument;

use crate::schemas::{ApiResponse, AppState};

/// Get the AI recommendations view
#[utoipa::path(
    get,
    path = "/api/v1/recommendations",
    tag = "recommendations",
    responses(
        (status = 200, description = "Recommendations retrieved successfully", body = ApiResponse<RecommendationsView>),
        (status = 503, description = "Summary document not loaded", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_recommendations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<RecommendationsView>>, StatusCode> {
    // The summary document is optional at load time, so this endpoint can
    // stay unavailable even after the prediction document arrived.
    let summary = state
        .summary()
        .await
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let response = ApiResponse {
        data: compute::recommendations(&summary),
        message: "Recommendations retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
