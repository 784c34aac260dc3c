use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::initialize_app_state;
use crate::loader::spawn_initial_load;
use crate::router::create_router;

pub async fn serve(data_base: &str, bind_address: &str) -> Result<()> {
    trace!("Entering serve function");
    info!("Predash application starting up");
    debug!("Data base: {}", data_base);
    debug!("Bind address: {}", bind_address);

    // Initialize application state and kick off the one-shot document load;
    // the server answers 503 on data endpoints until it finishes.
    let state = initialize_app_state(data_base);
    spawn_initial_load(state.clone());

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Predash API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
