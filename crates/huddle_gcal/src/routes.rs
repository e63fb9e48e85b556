// --- File: crates/huddle_gcal/src/routes.rs ---
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers::{create_meet_handler, get_calendar_handler, GcalState};

/// Creates a router containing all routes for the Google Calendar feature.
pub fn routes(state: Arc<GcalState>) -> Router {
    Router::new()
        .route("/calendar", get(get_calendar_handler))
        .route("/google-meet/create", post(create_meet_handler))
        .with_state(state)
}
