//! One-shot loading of the upstream prediction documents.
//!
//! The producer writes JSON with bare `NaN` literals in numeric positions,
//! which no strict JSON parser accepts. Every document is passed through
//! [`sanitize_nan`] before deserialization, turning those literals into
//! `null` so the schema's `Option` fields absorb them.

use std::borrow::Cow;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use model::{PredictionDocument, SummaryDocument};
use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::schemas::AppState;

const PREDICTION_FILE: &str = "future.json";
const SUMMARY_FILE: &str = "future_summary.json";

/// Errors from fetching or parsing a prediction document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("file read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

fn nan_field() -> &'static Regex {
    static NAN_FIELD: OnceLock<Regex> = OnceLock::new();
    NAN_FIELD.get_or_init(|| Regex::new(r":\s*NaN").expect("static regex must compile"))
}

/// Replaces bare `NaN` field values with `null`. Quoted occurrences of the
/// word NaN are not in field-value position and stay untouched.
pub fn sanitize_nan(raw: &str) -> Cow<'_, str> {
    nan_field().replace_all(raw, ": null")
}

async fn fetch_raw(base: &str, name: &str) -> Result<String, LoadError> {
    if base.starts_with("http://") || base.starts_with("https://") {
        let url = format!("{}/{}", base.trim_end_matches('/'), name);
        debug!("Fetching {}", url);
        let body = reqwest::get(&url).await?.error_for_status()?.text().await?;
        Ok(body)
    } else {
        let path = Path::new(base).join(name);
        debug!("Reading {}", path.display());
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

async fn fetch_document<T: DeserializeOwned>(base: &str, name: &str) -> Result<T, LoadError> {
    let raw = fetch_raw(base, name).await?;
    let sanitized = sanitize_nan(&raw);
    Ok(serde_json::from_str(&sanitized)?)
}

/// Fetches both documents concurrently and installs them into the state.
///
/// The prediction document is required; a missing or broken summary only
/// degrades the recommendations endpoint and is logged instead of failing
/// the load.
pub async fn load_documents(state: &AppState) -> Result<(), LoadError> {
    let (prediction, summary) = tokio::join!(
        fetch_document::<PredictionDocument>(&state.data_base, PREDICTION_FILE),
        fetch_document::<SummaryDocument>(&state.data_base, SUMMARY_FILE),
    );

    let prediction = prediction?;
    let summary = match summary {
        Ok(summary) => Some(Arc::new(summary)),
        Err(e) => {
            warn!("Summary document unavailable, recommendations disabled: {}", e);
            None
        }
    };

    info!("Loaded predictions for {} tickers", prediction.len());
    let mut documents = state.documents.write().await;
    documents.prediction = Some(Arc::new(prediction));
    documents.summary = summary;
    Ok(())
}

/// Spawns the initial load. On failure the state stays empty and every data
/// endpoint keeps answering 503; there is no retry, matching the one-shot
/// fetch of the page load this replaces.
pub fn spawn_initial_load(state: AppState) {
    tokio::spawn(async move {
        if let Err(e) = load_documents(&state).await {
            error!("Failed to load prediction data: {}", e);
        }
    });
}
