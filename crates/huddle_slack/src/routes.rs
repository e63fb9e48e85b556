// --- File: crates/huddle_slack/src/routes.rs ---
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers::{callback_handler, notify_handler, SlackState};

/// Creates a router containing all routes for the Slack feature.
pub fn routes(state: Arc<SlackState>) -> Router {
    Router::new()
        .route("/slack/notify", post(notify_handler))
        .route("/slack/callback", get(callback_handler))
        .with_state(state)
}
