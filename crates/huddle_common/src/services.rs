// --- File: crates/huddle_common/src/services.rs ---
//! Service abstractions for the upstream providers.
//!
//! Handlers hold these traits behind `Arc<dyn ...>` so the concrete Google,
//! Slack and Zoom clients can be swapped for in-process fakes in tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Calendar operations performed on behalf of the caller.
///
/// Every call carries the caller's OAuth access token; nothing is cached.
pub trait CalendarService: Send + Sync {
    /// Error type returned by calendar service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// List upcoming events, expanded to single instances and ordered by start time.
    fn list_events(
        &self,
        access_token: &str,
        calendar_id: &str,
        max_results: i32,
    ) -> BoxFuture<'_, Vec<CalendarEntry>, Self::Error>;

    /// Create an event with a video-conference link attached.
    fn create_meet_event(
        &self,
        access_token: &str,
        calendar_id: &str,
        request: MeetEventRequest,
    ) -> BoxFuture<'_, CreatedMeetEvent, Self::Error>;
}

/// Chat operations performed with a user's stored token.
pub trait ChatService: Send + Sync {
    /// Error type returned by chat service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Post a plain-text message to a channel.
    fn post_message(
        &self,
        access_token: &str,
        channel: &str,
        text: &str,
    ) -> BoxFuture<'_, ChatPostResult, Self::Error>;
}

/// Video meeting operations authenticated with server-side credentials.
pub trait MeetingService: Send + Sync {
    /// Error type returned by meeting service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Schedule a meeting.
    fn create_meeting(
        &self,
        request: VideoMeetingRequest,
    ) -> BoxFuture<'_, VideoMeeting, Self::Error>;
}

/// Start or end of a calendar entry, as the provider reported it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    /// RFC 3339 timestamp for timed events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// `YYYY-MM-DD` for all-day events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// A calendar entry reshaped for API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalendarEntry {
    pub id: String,
    pub summary: String,
    pub start: Option<EventTime>,
    pub end: Option<EventTime>,
}

/// Input for creating an event with a conference link.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub attendees: Vec<String>,
    /// Idempotency key for the conference create request.
    pub request_id: String,
}

/// The event the provider created.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreatedMeetEvent {
    pub event_id: String,
    /// URI of the first video entry point, if the provider attached one.
    pub meet_url: Option<String>,
    pub title: String,
    pub description: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Result of posting a chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPostResult {
    pub channel: String,
    /// Provider timestamp/id of the posted message.
    pub ts: String,
}

/// Input for scheduling a video meeting.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMeetingRequest {
    pub topic: String,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: u32,
    /// IANA time zone name.
    pub timezone: String,
}

/// A scheduled video meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VideoMeeting {
    pub id: i64,
    pub topic: String,
    pub start_time: String,
    pub duration: u32,
    pub timezone: String,
    pub join_url: String,
    pub start_url: String,
    pub password: String,
}
