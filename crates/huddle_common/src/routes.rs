// --- File: crates/huddle_common/src/routes.rs ---
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Liveness probe payload.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Health routes shared by every deployment.
///
/// `/health/google` is kept for the load balancer that probes the calendar
/// frontend; it reports the same status.
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/google", get(health))
}
