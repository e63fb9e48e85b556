// --- File: crates/huddle_gcal/src/service.rs ---
use huddle_common::services::{
    BoxFuture, CalendarEntry, CalendarService, CreatedMeetEvent, MeetEventRequest,
};
use thiserror::Error;
use tracing::debug;

use crate::auth::create_calendar_hub;
use crate::logic::{build_meet_event, to_calendar_entry, to_created_meet_event};

/// Google Calendar error types.
#[derive(Error, Debug)]
pub enum GcalError {
    /// The HTTPS client could not be built
    #[error("Failed to build Calendar client: {0}")]
    Client(String),

    /// The Calendar API call failed
    #[error("Google Calendar API error: {0}")]
    Api(String),
}

/// Calendar service backed by the Google Calendar v3 API.
#[derive(Clone, Debug, Default)]
pub struct GoogleCalendarService {
    base_url: Option<String>,
}

impl GoogleCalendarService {
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url }
    }
}

impl CalendarService for GoogleCalendarService {
    type Error = GcalError;

    fn list_events(
        &self,
        access_token: &str,
        calendar_id: &str,
        max_results: i32,
    ) -> BoxFuture<'_, Vec<CalendarEntry>, Self::Error> {
        let access_token = access_token.to_string();
        let calendar_id = calendar_id.to_string();

        Box::pin(async move {
            let hub = create_calendar_hub(&access_token, self.base_url.as_deref())?;
            debug!("Listing up to {} events from {}", max_results, calendar_id);

            let (_, events) = hub
                .events()
                .list(&calendar_id)
                .max_results(max_results)
                .single_events(true)
                .order_by("startTime")
                .doit()
                .await
                .map_err(|e| GcalError::Api(e.to_string()))?;

            Ok(events
                .items
                .unwrap_or_default()
                .iter()
                .map(to_calendar_entry)
                .collect())
        })
    }

    fn create_meet_event(
        &self,
        access_token: &str,
        calendar_id: &str,
        request: MeetEventRequest,
    ) -> BoxFuture<'_, CreatedMeetEvent, Self::Error> {
        let access_token = access_token.to_string();
        let calendar_id = calendar_id.to_string();

        Box::pin(async move {
            let hub = create_calendar_hub(&access_token, self.base_url.as_deref())?;
            let event = build_meet_event(&request);

            let (_, created) = hub
                .events()
                .insert(event, &calendar_id)
                .conference_data_version(1)
                .doit()
                .await
                .map_err(|e| GcalError::Api(e.to_string()))?;

            Ok(to_created_meet_event(created))
        })
    }
}
