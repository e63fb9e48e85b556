// --- File: crates/huddle_zoom/src/routes.rs ---
use axum::{routing::post, Router};
use std::sync::Arc;

use crate::handlers::{create_zoom_meeting_handler, ZoomState};

/// Creates a router containing all routes for the Zoom feature.
pub fn routes(state: Arc<ZoomState>) -> Router {
    Router::new()
        .route("/zoom/create", post(create_zoom_meeting_handler))
        .with_state(state)
}
