// --- File: crates/huddle_tokens/src/routes.rs ---
use axum::{routing::post, Router};
use std::sync::Arc;

use crate::handlers::save_token_handler;
use crate::store::TokenStore;

/// Creates a router with the token registration route.
///
/// The store is shared with the integrations that read tokens back, so it is
/// passed in rather than created here.
pub fn routes(store: Arc<TokenStore>) -> Router {
    Router::new()
        .route("/token", post(save_token_handler))
        .with_state(store)
}
