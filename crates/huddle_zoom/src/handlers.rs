// --- File: crates/huddle_zoom/src/handlers.rs ---
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use chrono::{DateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use huddle_common::services::{MeetingService, VideoMeetingRequest};
use huddle_common::{
    config_error, ensure_enabled, external_service_error, is_zoom_enabled, json_body,
    require_field, validation_error, HuddleError,
};
use huddle_config::{AppConfig, ZoomConfig};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::service::{ZoomError, ZoomMeetingService};

pub type DynMeetingService = dyn MeetingService<Error = ZoomError>;

pub const DEFAULT_TIMEZONE: &str = "UTC";

#[derive(Clone)]
pub struct ZoomState {
    pub config: Arc<AppConfig>,
    pub meetings: Arc<DynMeetingService>,
}

impl ZoomState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let meetings = Arc::new(ZoomMeetingService::new(&zoom_config(&config)));
        Self::with_service(config, meetings)
    }

    pub fn with_service(config: Arc<AppConfig>, meetings: Arc<DynMeetingService>) -> Self {
        Self { config, meetings }
    }
}

fn zoom_config(config: &AppConfig) -> ZoomConfig {
    config.zoom.clone().unwrap_or_default()
}

/// Body of `POST /api/zoom/create`.
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct CreateZoomRequest {
    pub title: String,
    pub description: Option<String>,
    /// RFC 3339
    pub start_time: String,
    /// Minutes
    pub duration: i64,
    /// IANA name, `UTC` when omitted
    pub timezone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateZoomResponse {
    pub meeting_id: String,
    #[serde(rename = "joinURL")]
    pub join_url: String,
    #[serde(rename = "startURL")]
    pub start_url: String,
    pub password: String,
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub duration: u32,
    pub timezone: String,
    pub created_at: String,
}

fn parse_timezone(value: Option<&str>) -> Result<String, HuddleError> {
    match value.map(str::trim).filter(|tz| !tz.is_empty()) {
        None => Ok(DEFAULT_TIMEZONE.to_string()),
        Some(name) => name
            .parse::<Tz>()
            .map(|tz| tz.name().to_string())
            .map_err(|_| validation_error(format!("Invalid timezone: {}", name))),
    }
}

/// Handler scheduling a Zoom meeting with the server's API credentials.
pub async fn create_zoom_meeting_handler(
    State(state): State<Arc<ZoomState>>,
    payload: Result<Json<CreateZoomRequest>, JsonRejection>,
) -> Result<Json<CreateZoomResponse>, HuddleError> {
    ensure_enabled(is_zoom_enabled(&state.config), "Zoom")?;

    let request = json_body(payload)?;
    require_field("title", &request.title)?;
    require_field("startTime", &request.start_time)?;
    let duration_minutes = u32::try_from(request.duration)
        .ok()
        .filter(|minutes| *minutes > 0)
        .ok_or_else(|| validation_error("duration is required"))?;

    if zoom_config(&state.config).credentials().is_none() {
        error!("Zoom API key or secret missing from configuration");
        return Err(config_error("Zoom API credentials not configured"));
    }

    let start_time = DateTime::parse_from_rfc3339(&request.start_time)
        .map_err(|_| validation_error("Invalid start time format. Use RFC3339 format."))?
        .with_timezone(&Utc);
    let timezone = parse_timezone(request.timezone.as_deref())?;

    let meeting = state
        .meetings
        .create_meeting(VideoMeetingRequest {
            topic: request.title,
            start_time,
            duration_minutes,
            timezone,
        })
        .await
        .map_err(|e| {
            error!("Error creating Zoom meeting: {}", e);
            match e {
                ZoomError::MissingCredentials => config_error("Zoom API credentials not configured"),
                _ => external_service_error("zoom", "Failed to create Zoom meeting"),
            }
        })?;

    info!("Created Zoom meeting {}", meeting.id);
    Ok(Json(CreateZoomResponse {
        meeting_id: meeting.id.to_string(),
        join_url: meeting.join_url,
        start_url: meeting.start_url,
        password: meeting.password,
        title: meeting.topic,
        description: request.description.unwrap_or_default(),
        start_time: meeting.start_time,
        duration: meeting.duration,
        timezone: meeting.timezone,
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    }))
}
