// --- File: crates/huddle_tokens/src/handlers.rs ---
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use huddle_common::{json_body, require_field, HuddleError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::store::TokenStore;

/// Body of `POST /api/token`.
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct SaveTokenRequest {
    pub user_id: String,
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

/// Stores (or replaces) the bearer token for a user.
pub async fn save_token_handler(
    State(store): State<Arc<TokenStore>>,
    payload: Result<Json<SaveTokenRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, HuddleError> {
    let request = json_body(payload)?;
    require_field("userId", &request.user_id)?;
    require_field("token", &request.token)?;

    store.set(request.user_id.as_str(), request.token);
    info!("Saved token for user {}", request.user_id);

    Ok(Json(MessageResponse {
        message: "Token saved successfully".to_string(),
    }))
}
