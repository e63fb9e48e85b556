// --- File: crates/huddle_zoom/src/service.rs ---
//! Zoom REST API client implementing the shared meeting service.

use huddle_common::client_with_timeout;
use huddle_common::services::{BoxFuture, MeetingService, VideoMeeting, VideoMeetingRequest};
use huddle_config::ZoomConfig;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::zoom_token::generate_zoom_jwt;

/// Zoom-specific error types.
#[derive(Error, Debug)]
pub enum ZoomError {
    /// Error occurred during a Zoom API request
    #[error("Zoom API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Zoom answered with anything but 201 Created
    #[error("Zoom API returned {status_code}: {body}")]
    UnexpectedStatus { status_code: u16, body: String },

    /// The JWT could not be signed
    #[error("Failed to generate Zoom token: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),

    /// The configured token lifetime does not fit a timestamp
    #[error("Invalid Zoom token lifetime: {0}s")]
    InvalidTokenTtl(i64),

    /// API key or secret not configured
    #[error("Zoom API credentials not configured")]
    MissingCredentials,
}

/// Meeting type 2: scheduled meeting.
const SCHEDULED_MEETING: u8 = 2;
const ZOOM_START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Serialize, Debug, PartialEq)]
pub struct MeetingSettings {
    pub host_video: bool,
    pub participant_video: bool,
    pub join_before_host: bool,
    pub mute_upon_entry: bool,
    pub watermark: bool,
    pub use_pmi: bool,
    pub approval_type: u8,
    pub audio: &'static str,
    pub auto_recording: &'static str,
}

impl Default for MeetingSettings {
    fn default() -> Self {
        Self {
            host_video: true,
            participant_video: true,
            join_before_host: false,
            mute_upon_entry: true,
            watermark: false,
            use_pmi: false,
            approval_type: 2,
            audio: "both",
            auto_recording: "none",
        }
    }
}

/// Body of `POST /users/me/meetings`.
#[derive(Serialize, Debug, PartialEq)]
pub struct CreateMeetingBody {
    pub topic: String,
    #[serde(rename = "type")]
    pub meeting_type: u8,
    pub start_time: String,
    pub duration: u32,
    pub timezone: String,
    pub settings: MeetingSettings,
}

impl From<&VideoMeetingRequest> for CreateMeetingBody {
    fn from(request: &VideoMeetingRequest) -> Self {
        Self {
            topic: request.topic.clone(),
            meeting_type: SCHEDULED_MEETING,
            start_time: request.start_time.format(ZOOM_START_TIME_FORMAT).to_string(),
            duration: request.duration_minutes,
            timezone: request.timezone.clone(),
            settings: MeetingSettings::default(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct ZoomMeetingResponse {
    id: i64,
    #[serde(default)]
    topic: String,
    #[serde(default)]
    start_time: String,
    #[serde(default)]
    duration: u32,
    #[serde(default)]
    timezone: String,
    #[serde(default)]
    join_url: String,
    #[serde(default)]
    start_url: String,
    #[serde(default)]
    password: String,
}

impl From<ZoomMeetingResponse> for VideoMeeting {
    fn from(response: ZoomMeetingResponse) -> Self {
        Self {
            id: response.id,
            topic: response.topic,
            start_time: response.start_time,
            duration: response.duration,
            timezone: response.timezone,
            join_url: response.join_url,
            start_url: response.start_url,
            password: response.password,
        }
    }
}

/// Zoom REST API client authenticated with a JWT signed from the
/// configured key and secret.
pub struct ZoomMeetingService {
    client: Client,
    api_base_url: String,
    credentials: Option<(String, String)>,
    token_ttl_secs: i64,
}

impl ZoomMeetingService {
    pub fn new(config: &ZoomConfig) -> Self {
        Self {
            client: client_with_timeout(config.timeout_secs),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            credentials: config
                .credentials()
                .map(|(key, secret)| (key.to_string(), secret.to_string())),
            token_ttl_secs: config.token_ttl_secs,
        }
    }
}

impl MeetingService for ZoomMeetingService {
    type Error = ZoomError;

    fn create_meeting(
        &self,
        request: VideoMeetingRequest,
    ) -> BoxFuture<'_, VideoMeeting, Self::Error> {
        Box::pin(async move {
            let (api_key, api_secret) = self
                .credentials
                .as_ref()
                .ok_or(ZoomError::MissingCredentials)?;
            let jwt = generate_zoom_jwt(api_key, api_secret, self.token_ttl_secs)?;

            let url = format!("{}/users/me/meetings", self.api_base_url);
            debug!("Creating Zoom meeting '{}'", request.topic);

            let response = self
                .client
                .post(&url)
                .bearer_auth(jwt)
                .json(&CreateMeetingBody::from(&request))
                .send()
                .await?;

            let status = response.status();
            if status != StatusCode::CREATED {
                let body = response.text().await.unwrap_or_default();
                error!("Zoom API returned status: {}", status);
                return Err(ZoomError::UnexpectedStatus {
                    status_code: status.as_u16(),
                    body,
                });
            }

            let meeting: ZoomMeetingResponse = response.json().await?;
            Ok(meeting.into())
        })
    }
}
