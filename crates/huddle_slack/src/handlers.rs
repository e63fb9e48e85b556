// --- File: crates/huddle_slack/src/handlers.rs ---
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use huddle_common::services::ChatService;
use huddle_common::{
    config_error, ensure_enabled, external_service_error, is_slack_enabled, json_body, not_found,
    require_field, validation_error, HuddleError,
};
use huddle_config::{AppConfig, SlackConfig};
use huddle_tokens::TokenStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::oauth::{exchange_code, CodeExchange};
use crate::service::{SlackChatService, SlackError};

pub type DynChatService = dyn ChatService<Error = SlackError>;

/// Shared state for the Slack routes.
#[derive(Clone)]
pub struct SlackState {
    pub config: Arc<AppConfig>,
    pub token_store: Arc<TokenStore>,
    pub chat: Arc<DynChatService>,
    /// Used for the OAuth code exchange.
    pub slack_api: SlackChatService,
}

impl SlackState {
    /// Wires the real Slack Web API client from `config.slack` (defaults when absent).
    pub fn new(config: Arc<AppConfig>, token_store: Arc<TokenStore>) -> Self {
        let slack_api = SlackChatService::new(&slack_config(&config));
        Self {
            config,
            token_store,
            chat: Arc::new(slack_api.clone()),
            slack_api,
        }
    }

    /// Same as [`SlackState::new`] but posts messages through `chat`.
    pub fn with_service(
        config: Arc<AppConfig>,
        token_store: Arc<TokenStore>,
        chat: Arc<DynChatService>,
    ) -> Self {
        Self {
            chat,
            ..Self::new(config, token_store)
        }
    }
}

fn slack_config(config: &AppConfig) -> SlackConfig {
    config.slack.clone().unwrap_or_default()
}

/// Body of `POST /api/slack/notify`.
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct NotifyRequest {
    pub user_id: String,
    pub channel: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

/// Posts a message to Slack with the token the user registered earlier.
pub async fn notify_handler(
    State(state): State<Arc<SlackState>>,
    payload: Result<Json<NotifyRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, HuddleError> {
    ensure_enabled(is_slack_enabled(&state.config), "Slack")?;

    let request = json_body(payload)?;
    require_field("userId", &request.user_id)?;
    require_field("channel", &request.channel)?;
    require_field("message", &request.message)?;

    // `get` clones the token out; the store lock is not held past this line.
    let Some(token) = state.token_store.get(&request.user_id) else {
        info!("No Slack token stored for user {}", request.user_id);
        return Err(not_found("Token not found for user"));
    };

    let posted = state
        .chat
        .post_message(&token, &request.channel, &request.message)
        .await
        .map_err(|e| {
            error!("Error sending Slack message: {}", e);
            external_service_error("slack", "Failed to send Slack message")
        })?;

    info!(
        "Slack message sent for user {} to {} (ts {})",
        request.user_id, posted.channel, posted.ts
    );
    Ok(Json(MessageResponse {
        message: "Slack notification sent successfully".to_string(),
    }))
}

/// Query string Slack appends when redirecting back after an install.
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct CallbackQuery {
    pub code: Option<String>,
    /// The user id the install was started for.
    pub state: Option<String>,
    /// Set by Slack when the user cancelled the install.
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CallbackResponse {
    pub message: String,
    pub user_id: String,
}

/// Completes the Slack OAuth install and stores the resulting token.
pub async fn callback_handler(
    State(state): State<Arc<SlackState>>,
    Query(query): Query<CallbackQuery>,
) -> Result<Response, HuddleError> {
    ensure_enabled(is_slack_enabled(&state.config), "Slack")?;

    if let Some(error) = query.error.as_deref() {
        info!("Slack install was not completed: {}", error);
    }
    let code = query
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| validation_error("Code not found"))?;
    let user_id = query.state.unwrap_or_default();
    require_field("state", &user_id)?;

    let slack = slack_config(&state.config);
    let (client_id, client_secret) = slack
        .client_credentials()
        .ok_or_else(|| config_error("Slack client credentials not configured"))?;

    let token = exchange_code(
        state.slack_api.client(),
        state.slack_api.api_base_url(),
        CodeExchange {
            code: &code,
            client_id,
            client_secret,
            redirect_uri: slack.redirect_uri.as_deref(),
        },
    )
    .await
    .map_err(|e| {
        error!("Slack OAuth exchange failed: {}", e);
        match e {
            SlackError::ApiError(message) => external_service_error("slack", message),
            _ => external_service_error("slack", "Failed to complete Slack authorization"),
        }
    })?;

    state.token_store.set(user_id.as_str(), token);
    info!("Stored Slack token for user {}", user_id);

    match slack.post_install_redirect.as_deref() {
        Some(target) if !target.is_empty() => Ok(Redirect::to(target).into_response()),
        _ => Ok(Json(CallbackResponse {
            message: "Slack token saved".to_string(),
            user_id,
        })
        .into_response()),
    }
}
