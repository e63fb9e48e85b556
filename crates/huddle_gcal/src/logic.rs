// --- File: crates/huddle_gcal/src/logic.rs ---
use chrono::{DateTime, SecondsFormat, Utc};
use google_calendar3::api::{
    ConferenceData, ConferenceSolutionKey, CreateConferenceRequest, Event, EventAttendee,
    EventDateTime,
};
use huddle_common::services::{CalendarEntry, CreatedMeetEvent, EventTime, MeetEventRequest};
use serde::{Deserialize, Serialize};

/// Conference solution requested for new events.
pub const MEET_SOLUTION_TYPE: &str = "hangoutsMeet";
const VIDEO_ENTRY_POINT: &str = "video";
const EVENT_TIME_ZONE: &str = "UTC";

// --- Request/response bodies ---

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalendarEventsResponse {
    pub events: Vec<CalendarEntry>,
    pub count: usize,
}

/// Body of `POST /api/google-meet/create`.
#[derive(Deserialize, Debug, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct CreateMeetRequest {
    pub title: String,
    pub description: Option<String>,
    /// RFC 3339
    pub start_time: String,
    /// RFC 3339
    pub end_time: String,
    pub attendees: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetResponse {
    pub event_id: String,
    #[serde(rename = "meetURL")]
    pub meet_url: String,
    pub title: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub attendees: Vec<String>,
    pub created_at: String,
}

/// Parses an RFC 3339 timestamp into UTC.
pub fn parse_rfc3339(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// RFC 3339 with second precision and a `Z` suffix.
pub fn format_utc(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// --- Mapping between the API types and the shared service types ---

pub fn event_time(value: &EventDateTime) -> EventTime {
    EventTime {
        date_time: value.date_time.as_ref().map(format_utc),
        date: value.date.map(|d| d.format("%Y-%m-%d").to_string()),
        time_zone: value.time_zone.clone(),
    }
}

pub fn to_calendar_entry(event: &Event) -> CalendarEntry {
    CalendarEntry {
        id: event.id.clone().unwrap_or_default(),
        summary: event.summary.clone().unwrap_or_default(),
        start: event.start.as_ref().map(event_time),
        end: event.end.as_ref().map(event_time),
    }
}

fn utc_event_time(value: DateTime<Utc>) -> EventDateTime {
    EventDateTime {
        date_time: Some(value),
        time_zone: Some(EVENT_TIME_ZONE.to_string()),
        ..Default::default()
    }
}

/// Builds the event to insert, including the Meet create-request.
pub fn build_meet_event(request: &MeetEventRequest) -> Event {
    let attendees = (!request.attendees.is_empty()).then(|| {
        request
            .attendees
            .iter()
            .map(|email| EventAttendee {
                email: Some(email.clone()),
                ..Default::default()
            })
            .collect()
    });

    Event {
        summary: Some(request.title.clone()),
        description: request.description.clone(),
        start: Some(utc_event_time(request.start_time)),
        end: Some(utc_event_time(request.end_time)),
        attendees,
        conference_data: Some(ConferenceData {
            create_request: Some(CreateConferenceRequest {
                request_id: Some(request.request_id.clone()),
                conference_solution_key: Some(ConferenceSolutionKey {
                    type_: Some(MEET_SOLUTION_TYPE.to_string()),
                }),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// URI of the first `video` entry point of the event's conference.
pub fn video_entry_point(event: &Event) -> Option<String> {
    event
        .conference_data
        .as_ref()?
        .entry_points
        .as_ref()?
        .iter()
        .find(|ep| ep.entry_point_type.as_deref() == Some(VIDEO_ENTRY_POINT))
        .and_then(|ep| ep.uri.clone())
}

pub fn to_created_meet_event(event: Event) -> CreatedMeetEvent {
    let meet_url = video_entry_point(&event);
    let start_time = event
        .start
        .as_ref()
        .and_then(|s| s.date_time.as_ref())
        .map(format_utc);
    let end_time = event
        .end
        .as_ref()
        .and_then(|e| e.date_time.as_ref())
        .map(format_utc);

    CreatedMeetEvent {
        event_id: event.id.unwrap_or_default(),
        meet_url,
        title: event.summary.unwrap_or_default(),
        description: event.description.unwrap_or_default(),
        start_time,
        end_time,
    }
}
