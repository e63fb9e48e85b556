// --- File: crates/huddle_slack/src/service.rs ---
//! Slack Web API client implementing the shared chat service.

use huddle_common::services::{BoxFuture, ChatPostResult, ChatService};
use huddle_common::client_with_timeout;
use huddle_config::SlackConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Slack-specific error types.
#[derive(Error, Debug)]
pub enum SlackError {
    /// Error occurred during a Slack API request
    #[error("Slack API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Slack answered with a non-2xx status
    #[error("Slack API returned HTTP {status_code}: {body}")]
    HttpStatus { status_code: u16, body: String },

    /// Slack answered `{"ok": false, "error": ...}`
    #[error("Slack API returned an error: {0}")]
    ApiError(String),

    /// Missing or incomplete Slack configuration
    #[error("Slack configuration missing or incomplete: {0}")]
    ConfigError(String),
}

#[derive(Serialize)]
struct PostMessageBody<'a> {
    channel: &'a str,
    text: &'a str,
}

#[derive(Deserialize, Debug)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    ts: Option<String>,
}

/// Slack Web API client for `chat.postMessage`.
#[derive(Clone)]
pub struct SlackChatService {
    client: Client,
    api_base_url: String,
}

impl SlackChatService {
    pub fn new(config: &SlackConfig) -> Self {
        Self::with_client(client_with_timeout(config.timeout_secs), &config.api_base_url)
    }

    pub fn with_client(client: Client, api_base_url: &str) -> Self {
        Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

impl ChatService for SlackChatService {
    type Error = SlackError;

    fn post_message(
        &self,
        access_token: &str,
        channel: &str,
        text: &str,
    ) -> BoxFuture<'_, ChatPostResult, Self::Error> {
        let access_token = access_token.to_string();
        let channel = channel.to_string();
        let text = text.to_string();

        Box::pin(async move {
            let url = format!("{}/chat.postMessage", self.api_base_url);
            debug!("Posting Slack message to channel {}", channel);

            let response = self
                .client
                .post(&url)
                .bearer_auth(&access_token)
                .json(&PostMessageBody {
                    channel: &channel,
                    text: &text,
                })
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(SlackError::HttpStatus {
                    status_code: status.as_u16(),
                    body,
                });
            }

            let body: PostMessageResponse = response.json().await?;
            if !body.ok {
                return Err(SlackError::ApiError(
                    body.error.unwrap_or_else(|| "unknown_error".to_string()),
                ));
            }

            Ok(ChatPostResult {
                channel: body.channel.unwrap_or(channel),
                ts: body.ts.unwrap_or_default(),
            })
        })
    }
}
