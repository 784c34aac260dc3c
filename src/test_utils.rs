#[cfg(test)]
pub mod test_utils {
    use std::sync::Arc;

    use axum::Router;
    use model::{PredictionDocument, SummaryDocument};
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    use crate::loader::sanitize_nan;
    use crate::router::create_router;
    use crate::schemas::AppState;

    /// Three-ticker prediction document as the producer emits it, bare NaN
    /// literals included.
    pub const FIXTURE_PREDICTIONS: &str = r#"{
        "metadata": {
            "prediction_date": "2025-06-15T08:30:00",
            "model_epochs": 120
        },
        "comprehensive_predictions": {
            "aapl": {
                "basic_info": {
                    "prediction_date": "2025-06-15",
                    "data_points": 250,
                    "feature_dimension": 64,
                    "last_known_return": 0.012
                },
                "multi_horizon_returns": {
                    "1d": { "expected_return": 0.004, "cumulative_return": 0.004 },
                    "3d": { "expected_return": 0.012, "cumulative_return": 0.016 },
                    "5d": { "expected_return": 0.021, "cumulative_return": 0.034 },
                    "7d": {
                        "expected_return": 0.03,
                        "cumulative_return": 0.05,
                        "daily_returns": [0.01, NaN, 0.02]
                    }
                },
                "risk_metrics": {
                    "volatility_7d": 0.06,
                    "volatility_20d": 0.08,
                    "var_95_7d": -0.04,
                    "var_99_7d": -0.07,
                    "sharpe_ratio_7d": 1.2,
                    "max_drawdown_7d": -0.05
                },
                "selection_scores": { "composite_score": 70, "return_score": 80 },
                "technical_signals": { "predicted_signal": "BUY", "momentum_5d": 0.02 },
                "trend_analysis": {
                    "predicted_trend": "UPTREND",
                    "trend_strength": 0.8,
                    "trend_consistency": 0.7,
                    "trend_change_vs_history": "IMPROVING"
                },
                "probability_distributions": {
                    "prob_positive_7d": 0.65,
                    "prob_gain_5pct_7d": 0.3,
                    "prob_outperform_market_7d": 0.55
                }
            },
            "msft": {
                "multi_horizon_returns": {
                    "7d": { "expected_return": -0.01, "cumulative_return": NaN }
                },
                "risk_metrics": { "volatility_7d": 0.03, "sharpe_ratio_7d": 0.4 },
                "selection_scores": { "composite_score": 50 },
                "technical_signals": { "predicted_signal": "HOLD" }
            },
            "baaz": {
                "multi_horizon_returns": {
                    "7d": { "expected_return": 0.01 }
                },
                "risk_metrics": { "volatility_7d": 0.0005 },
                "selection_scores": { "composite_score": 30 },
                "technical_signals": { "predicted_signal": "SELL" },
                "trend_analysis": { "predicted_trend": "DOWNTREND" }
            }
        },
        "training_history": {
            "train": [0.9, 0.7, 0.6],
            "valid": [1.0, 0.8]
        }
    }"#;

    /// Matching summary document.
    pub const FIXTURE_SUMMARY: &str = r#"{
        "summary": {
            "total_stocks_analyzed": 3,
            "successful_predictions": 3,
            "average_composite_score": 50.0,
            "top_score": 70.0,
            "rating_distribution": { "BUY": 1, "HOLD": 1, "SELL": 1 }
        },
        "top_recommendations": {
            "aapl": { "score": 70.0, "expected_7d_return": 0.03, "risk_level": "HIGH" }
        },
        "avoid_list": {
            "baaz": { "score": 30.0, "reason": "LOW_COMPOSITE_SCORE" }
        }
    }"#;

    /// Create AppState with the fixture documents already installed
    pub async fn setup_test_app_state() -> AppState {
        let state = AppState::new("./unused-in-tests".to_string());

        let prediction: PredictionDocument =
            serde_json::from_str(&sanitize_nan(FIXTURE_PREDICTIONS))
                .expect("prediction fixture should parse");
        let summary: SummaryDocument = serde_json::from_str(&sanitize_nan(FIXTURE_SUMMARY))
            .expect("summary fixture should parse");

        let mut documents = state.documents.write().await;
        documents.prediction = Some(Arc::new(prediction));
        documents.summary = Some(Arc::new(summary));
        drop(documents);

        state
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app with the fixture documents loaded
    pub async fn setup_test_app() -> Router {
        let _ = init_test_tracing();
        let state = setup_test_app_state().await;
        create_router(state)
    }

    /// Create axum app whose document load has not finished
    pub async fn setup_loading_app() -> Router {
        let _ = init_test_tracing();
        create_router(AppState::new("./unused-in-tests".to_string()))
    }
}
