use crate::schemas::AppState;

/// Initialize application state for a data base location.
///
/// The base is either an http(s) URL or a filesystem directory containing
/// the prediction documents.
pub fn initialize_app_state(data_base: &str) -> AppState {
    tracing::info!("Serving prediction data from: {}", data_base);
    AppState::new(data_base.to_string())
}
