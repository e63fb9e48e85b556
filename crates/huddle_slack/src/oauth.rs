// --- File: crates/huddle_slack/src/oauth.rs ---
//! Slack "Add to Slack" install flow: trading the callback code for a token.

use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::service::SlackError;

/// Form fields sent to `oauth.v2.access`.
#[derive(Debug, Clone)]
pub struct CodeExchange<'a> {
    pub code: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub redirect_uri: Option<&'a str>,
}

#[derive(Deserialize, Debug, Default)]
pub struct AuthedUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct IncomingWebhook {
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Response of `oauth.v2.access`.
#[derive(Deserialize, Debug, Default)]
pub struct OAuthAccessResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    /// Bot token.
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub authed_user: Option<AuthedUser>,
    #[serde(default)]
    pub incoming_webhook: Option<IncomingWebhook>,
}

impl OAuthAccessResponse {
    /// The user token when the install granted user scopes, else the bot token.
    pub fn preferred_token(&self) -> Option<&str> {
        self.authed_user
            .as_ref()
            .and_then(|user| user.access_token.as_deref())
            .filter(|token| !token.is_empty())
            .or_else(|| self.access_token.as_deref().filter(|t| !t.is_empty()))
    }
}

/// Exchanges an OAuth callback code for an access token.
pub async fn exchange_code(
    client: &Client,
    api_base_url: &str,
    exchange: CodeExchange<'_>,
) -> Result<String, SlackError> {
    let url = format!("{}/oauth.v2.access", api_base_url.trim_end_matches('/'));

    let mut form = vec![
        ("code", exchange.code),
        ("client_id", exchange.client_id),
        ("client_secret", exchange.client_secret),
    ];
    if let Some(redirect_uri) = exchange.redirect_uri {
        form.push(("redirect_uri", redirect_uri));
    }

    let response = client.post(&url).form(&form).send().await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SlackError::HttpStatus {
            status_code: status.as_u16(),
            body,
        });
    }

    let body: OAuthAccessResponse = response.json().await?;
    if !body.ok {
        let error = body.error.unwrap_or_else(|| "unknown_error".to_string());
        warn!("Slack OAuth exchange rejected: {}", error);
        return Err(SlackError::ApiError(error));
    }

    if let Some(url) = body.incoming_webhook.as_ref().and_then(|w| w.url.as_deref()) {
        info!("Slack install created incoming webhook {}", url);
    }

    body.preferred_token()
        .map(str::to_string)
        .ok_or_else(|| SlackError::ApiError("no access token in OAuth response".to_string()))
}
