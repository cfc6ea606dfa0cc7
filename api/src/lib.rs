use std::sync::Arc;

pub mod core;
pub mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::{
    core::{app_config::AppConfig, app_state::AppState, cors::cors_layer},
    error_handler::{AppError, AppResult},
    routes::{
        explain::explain_route::explain_material,
        health_route::{healthz, root},
        materials::materials_route::search_materials,
    },
};

/// Loads configuration, builds the clients and serves until Ctrl+C.
pub async fn start() -> AppResult<()> {
    let config = AppConfig::from_env()?;
    let cors = cors_layer(config.frontend_origin.as_deref())?;
    let state = Arc::new(AppState::new(&config.materials, config.llm.clone())?);

    let app = build_router(state, cors);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&config.address)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %config.address, "listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Route table with CORS and request tracing.
pub fn build_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/api/materials", post(search_materials))
        .route("/api/explain", post(explain_material))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server simply runs until killed.
            warn!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
