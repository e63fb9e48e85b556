// File: services/huddle_backend/src/main.rs
use huddle_backend::{app_state::AppState, build_router};
use huddle_common::{enabled_integrations, logging, Context};
use huddle_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(load_config().context("Failed to load configuration")?);
    logging::init_with_config(&config.logging);
    info!("Enabled integrations: {:?}", enabled_integrations(&config));

    let state = AppState::new(config.clone());
    let app = build_router(&state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = logging::log_result(
        TcpListener::bind(&addr).await,
        &format!("Starting server at http://{}", addr),
        "Failed to bind listener",
    )?;
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(e) => {
            logging::log_error(e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
