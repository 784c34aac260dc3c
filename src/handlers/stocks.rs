use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use common::{StockDetail, StockRow, StockTrend};
use compute::ViewState;
use tracing::instrument;

use crate::schemas::{ApiResponse, AppState, StocksQuery};

fn view_from_query(query: &StocksQuery) -> ViewState {
    let mut view = ViewState::default();
    if let Some(search) = &query.search {
        view = view.set_search(search.clone());
    }
    if let Some(sort_by) = query.sort_by {
        view = view.set_sort_key(sort_by);
    }
    if let Some(order) = query.order {
        view = view.set_sort_order(order);
    }
    view
}

/// Get the filtered and sorted stock table
#[utoipa::path(
    get,
    path = "/api/v1/stocks",
    tag = "stocks",
    responses(
        (status = 200, description = "Stock rows retrieved successfully", body = ApiResponse<Vec<StockRow>>),
        (status = 503, description = "Prediction data not loaded yet", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_stocks(
    Query(query): Query<StocksQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StockRow>>>, StatusCode> {
    let doc = state
        .prediction()
        .await
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let view = view_from_query(&query);
    let response = ApiResponse {
        data: compute::stock_rows(&doc, &view),
        message: "Stock rows retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Get the deep-analysis panels for one ticker
#[utoipa::path(
    get,
    path = "/api/v1/stocks/{symbol}",
    tag = "stocks",
    params(
        ("symbol" = String, Path, description = "Ticker symbol as it appears in the document"),
    ),
    responses(
        (status = 200, description = "Stock detail retrieved successfully", body = ApiResponse<StockDetail>),
        (status = 404, description = "Unknown ticker", body = ErrorResponse),
        (status = 503, description = "Prediction data not loaded yet", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_stock(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<StockDetail>>, StatusCode> {
    let doc = state
        .prediction()
        .await
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let detail = compute::stock_detail(&doc, &symbol).ok_or(StatusCode::NOT_FOUND)?;
    let response = ApiResponse {
        data: detail,
        message: "Stock detail retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Get the trend chart series for one ticker
#[utoipa::path(
    get,
    path = "/api/v1/stocks/{symbol}/trend",
    tag = "stocks",
    params(
        ("symbol" = String, Path, description = "Ticker symbol as it appears in the document"),
    ),
    responses(
        (status = 200, description = "Stock trend retrieved successfully", body = ApiResponse<StockTrend>),
        (status = 404, description = "Unknown ticker", body = ErrorResponse),
        (status = 503, description = "Prediction data not loaded yet", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_stock_trend(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<StockTrend>>, StatusCode> {
    let doc = state
        .prediction()
        .await
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let trend = compute::stock_trend(&doc, &symbol).ok_or(StatusCode::NOT_FOUND)?;
    let response = ApiResponse {
        data: trend,
        message: "Stock trend retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}

/// Get the top ten tickers by expected 7-day return
#[utoipa::path(
    get,
    path = "/api/v1/top-performers",
    tag = "stocks",
    responses(
        (status = 200, description = "Top performers retrieved successfully", body = ApiResponse<Vec<StockRow>>),
        (status = 503, description = "Prediction data not loaded yet", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_top_performers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StockRow>>>, StatusCode> {
    let doc = state
        .prediction()
        .await
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let response = ApiResponse {
        data: compute::top_performers(&doc),
        message: "Top performers retrieved successfully".to_string(),
        success: true,
    };

    Ok(Json(response))
}
