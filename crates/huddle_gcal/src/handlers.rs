// File: crates/huddle_gcal/src/handlers.rs
use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    response::Json,
};
use chrono::Utc;
use huddle_common::services::{CalendarService, MeetEventRequest};
use huddle_common::{
    bearer_token, ensure_enabled, external_service_error, is_gcal_enabled, json_body,
    require_field, validation_error, HuddleError,
};
use huddle_config::{AppConfig, GcalConfig};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::logic::{
    format_utc, parse_rfc3339, CalendarEventsResponse, CreateMeetRequest, CreateMeetResponse,
};
use crate::service::{GcalError, GoogleCalendarService};

pub type DynCalendarService = dyn CalendarService<Error = GcalError>;

// Define shared state needed by GCal handlers
#[derive(Clone)]
pub struct GcalState {
    pub config: Arc<AppConfig>,
    pub calendar: Arc<DynCalendarService>,
}

impl GcalState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let base_url = gcal_config(&config).base_url;
        Self::with_service(config, Arc::new(GoogleCalendarService::new(base_url)))
    }

    pub fn with_service(config: Arc<AppConfig>, calendar: Arc<DynCalendarService>) -> Self {
        Self { config, calendar }
    }
}

fn gcal_config(config: &AppConfig) -> GcalConfig {
    config.gcal.clone().unwrap_or_default()
}

/// Handler listing the caller's upcoming events.
pub async fn get_calendar_handler(
    State(state): State<Arc<GcalState>>,
    headers: HeaderMap,
) -> Result<Json<CalendarEventsResponse>, HuddleError> {
    ensure_enabled(is_gcal_enabled(&state.config), "GCal")?;
    let access_token = bearer_token(&headers)?;
    let gcal = gcal_config(&state.config);

    let events = state
        .calendar
        .list_events(&access_token, &gcal.calendar_id, gcal.max_results)
        .await
        .map_err(|e| {
            error!("Unable to retrieve calendar events: {}", e);
            external_service_error("gcal", "Unable to retrieve calendar events")
        })?;

    info!("Retrieved {} calendar events", events.len());
    Ok(Json(CalendarEventsResponse {
        count: events.len(),
        events,
    }))
}

/// Handler creating a calendar event with a Google Meet link.
pub async fn create_meet_handler(
    State(state): State<Arc<GcalState>>,
    headers: HeaderMap,
    payload: Result<Json<CreateMeetRequest>, JsonRejection>,
) -> Result<Json<CreateMeetResponse>, HuddleError> {
    ensure_enabled(is_gcal_enabled(&state.config), "GCal")?;
    let access_token = bearer_token(&headers)?;

    let request = json_body(payload)?;
    require_field("title", &request.title)?;
    require_field("startTime", &request.start_time)?;
    require_field("endTime", &request.end_time)?;

    let start_time = parse_rfc3339(&request.start_time)
        .ok_or_else(|| validation_error("Invalid start time format. Use RFC3339 format."))?;
    let end_time = parse_rfc3339(&request.end_time)
        .ok_or_else(|| validation_error("Invalid end time format. Use RFC3339 format."))?;

    let attendees = request.attendees.unwrap_or_default();
    let gcal = gcal_config(&state.config);

    let created = state
        .calendar
        .create_meet_event(
            &access_token,
            &gcal.calendar_id,
            MeetEventRequest {
                title: request.title,
                description: request.description,
                start_time,
                end_time,
                attendees: attendees.clone(),
                request_id: format!("meet-{}", Uuid::new_v4()),
            },
        )
        .await
        .map_err(|e| {
            error!("Unable to create event: {}", e);
            external_service_error("gcal", "Unable to create calendar event")
        })?;

    info!("Created calendar event {} with Meet link", created.event_id);
    Ok(Json(CreateMeetResponse {
        event_id: created.event_id,
        meet_url: created.meet_url.unwrap_or_default(),
        title: created.title,
        description: created.description,
        start_time: created.start_time.unwrap_or_default(),
        end_time: created.end_time.unwrap_or_default(),
        attendees,
        created_at: format_utc(&Utc::now()),
    }))
}
