#[cfg(test)]
mod integration_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::schemas::ApiResponse;
    use crate::test_utils::test_utils::{setup_loading_app, setup_test_app};

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["data"], "loaded");
    }

    #[tokio::test]
    async fn test_health_check_while_loading() {
        // Health stays 200 before the documents arrive; only the data field
        // reports the pending load.
        let app = setup_loading_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"], "loading");
    }

    #[tokio::test]
    async fn test_data_endpoints_unavailable_while_loading() {
        let app = setup_loading_app().await;
        let server = TestServer::new(app).unwrap();

        for path in [
            "/api/v1/overview",
            "/api/v1/stocks",
            "/api/v1/stocks/aapl",
            "/api/v1/sentiment",
            "/api/v1/analysis",
            "/api/v1/recommendations",
        ] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        }
    }

    #[tokio::test]
    async fn test_market_overview() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/overview").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Market overview retrieved successfully");

        let overview = &body.data;
        assert_eq!(overview["stock_count"], 3);
        assert_eq!(overview["prediction_date"], "2025-06-15");
        assert_eq!(overview["feature_dimension"], 64);
        // (70 + 50 + 30) / 3
        assert_eq!(overview["avg_composite_score"], 50.0);
        assert_eq!(overview["model_epochs_display"], "120.0");
    }

    #[tokio::test]
    async fn test_get_stocks_default_sort() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/stocks").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert!(body.success);

        // Expected 7d return descending: 0.03, 0.01, -0.01.
        let symbols: Vec<&str> = body
            .data
            .iter()
            .map(|row| row["symbol"].as_str().unwrap())
            .collect();
        assert_eq!(symbols, vec!["aapl", "baaz", "msft"]);

        let aapl = &body.data[0];
        assert_eq!(aapl["rating"], "GOOD");
        assert_eq!(aapl["risk_level"], "HIGH");
        assert_eq!(aapl["signal"], "BUY");
        assert_eq!(aapl["trend_icon"], "UP");
    }

    #[tokio::test]
    async fn test_get_stocks_search_filter() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/stocks?search=aa").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        let symbols: Vec<&str> = body
            .data
            .iter()
            .map(|row| row["symbol"].as_str().unwrap())
            .collect();
        assert_eq!(symbols, vec!["aapl", "baaz"]);
    }

    #[tokio::test]
    async fn test_get_stocks_sort_by_volatility_ascending() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/stocks?sort_by=volatility&order=asc")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        let symbols: Vec<&str> = body
            .data
            .iter()
            .map(|row| row["symbol"].as_str().unwrap())
            .collect();
        assert_eq!(symbols, vec!["baaz", "msft", "aapl"]);
    }

    #[tokio::test]
    async fn test_get_stock_detail() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/stocks/aapl").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        let detail = &body.data;
        assert_eq!(detail["symbol"], "aapl");
        assert_eq!(detail["basic"]["data_points"], 250);
        assert_eq!(detail["risk"]["sharpe_ratio_7d"], 1.2);
        assert_eq!(detail["technical"]["signal"], "BUY");
        assert_eq!(detail["technical"]["trend"], "UPTREND");
        assert_eq!(detail["scores"]["composite_score"], 70.0);
        assert_eq!(detail["probabilities"]["prob_positive_7d"], 0.65);
    }

    #[tokio::test]
    async fn test_get_stock_detail_defaults_for_sparse_ticker() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/stocks/msft").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        let detail = &body.data;
        // msft carries no trend analysis; everything degrades in place.
        assert_eq!(detail["technical"]["trend"], "UNKNOWN");
        assert_eq!(detail["technical"]["trend_strength"], 0.0);
        assert!(detail["basic"]["data_points"].is_null());
    }

    #[tokio::test]
    async fn test_get_stock_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/stocks/tsla").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let response = server.get("/api/v1/stocks/tsla/trend").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_stock_trend_sanitizes_nan_daily_return() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/stocks/aapl/trend").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        let trend = &body.data;
        assert_eq!(trend["horizons"].as_array().unwrap().len(), 4);
        assert_eq!(trend["horizons"][3]["expected_pct"], 3.0);

        // The middle daily return was a bare NaN in the document.
        let daily = trend["daily_returns"].as_array().unwrap();
        assert_eq!(daily.len(), 3);
        assert_eq!(daily[1]["return_pct"], 0.0);
        assert_eq!(daily[2]["cumulative_pct"], 3.0);
    }

    #[tokio::test]
    async fn test_get_top_performers() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/top-performers").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 3);
        assert_eq!(body.data[0]["symbol"], "aapl");
        assert_eq!(body.data[2]["symbol"], "msft");
    }

    #[tokio::test]
    async fn test_get_sentiment_distribution() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/sentiment").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 3);
        for (index, name) in ["bullish", "bearish", "neutral"].iter().enumerate() {
            assert_eq!(body.data[index]["name"], *name);
            assert_eq!(body.data[index]["count"], 1);
            assert_eq!(body.data[index]["percent"], 33.0);
        }
    }

    #[tokio::test]
    async fn test_get_risk_return_scatter() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/risk-return?search=msft").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 1);
        let point = &body.data[0];
        assert_eq!(point["symbol"], "MSFT");
        assert_eq!(point["return_pct"], -1.0);
        assert_eq!(point["confidence"], 50.0);
    }

    #[tokio::test]
    async fn test_get_market_analysis() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/analysis").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        let analysis = &body.data;
        assert_eq!(analysis["signals"]["buy"], 1);
        assert_eq!(analysis["signals"]["sell"], 1);
        assert_eq!(analysis["signals"]["hold"], 1);
        assert_eq!(analysis["trends"]["uptrends"], 1);
        assert_eq!(analysis["trends"]["downtrends"], 1);
        assert_eq!(analysis["risk_distribution"]["high"], 1);
        assert_eq!(analysis["risk_distribution"]["medium"], 1);
        assert_eq!(analysis["risk_distribution"]["low"], 0);
        assert_eq!(analysis["risk_distribution"]["minimal"], 1);
        assert_eq!(analysis["statistics"]["total_stocks"], 3);
        assert_eq!(analysis["statistics"]["min_expected_return_7d"], -0.01);
        assert_eq!(analysis["statistics"]["max_expected_return_7d"], 0.03);
    }

    #[tokio::test]
    async fn test_get_training_history() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/training-history").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data.len(), 3);
        assert_eq!(body.data[0]["epoch"], 1);
        assert_eq!(body.data[0]["train_loss"], 0.9);
        assert_eq!(body.data[0]["valid_loss"], 1.0);
        // Validation series is one short; the tail pads with 0.
        assert_eq!(body.data[2]["valid_loss"], 0.0);
    }

    #[tokio::test]
    async fn test_get_recommendations() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/recommendations").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<serde_json::Value> = response.json();
        let view = &body.data;
        assert_eq!(view["summary"]["total_stocks_analyzed"], 3);
        assert_eq!(view["summary"]["success_rate_display"], "100%");
        assert_eq!(view["summary"]["rating_distribution"]["buy"], 1);
        assert_eq!(view["top_recommendations"][0]["symbol"], "aapl");
        assert_eq!(view["top_recommendations"][0]["risk_level"], "HIGH");
        assert_eq!(view["avoid_list"][0]["symbol"], "baaz");
        assert_eq!(view["avoid_list"][0]["reason"], "LOW_COMPOSITE_SCORE");
    }

    #[tokio::test]
    async fn test_nan_cumulative_return_serializes_as_default() {
        // msft's cumulative_return was a bare NaN upstream; after the
        // sanitizer and the defaults policy it comes out as plain 0.
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/stocks?search=msft").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<serde_json::Value>> = response.json();
        assert_eq!(body.data[0]["cumulative_return_7d"], 0.0);
    }
}
