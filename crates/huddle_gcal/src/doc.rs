// --- File: crates/huddle_gcal/src/doc.rs ---
#![cfg(feature = "openapi")]
#![allow(dead_code)]

use crate::logic::{CalendarEventsResponse, CreateMeetRequest, CreateMeetResponse};
use huddle_common::services::{CalendarEntry, EventTime};
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/calendar",
    responses(
        (status = 200, description = "Upcoming events of the primary calendar", body = CalendarEventsResponse),
        (status = 401, description = "Authorization header missing or not a bearer token"),
        (status = 500, description = "Google Calendar call failed"),
        (status = 503, description = "GCal service disabled by configuration")
    ),
    tag = "GCal"
)]
fn doc_get_calendar() {}

#[utoipa::path(
    post,
    path = "/google-meet/create",
    request_body = CreateMeetRequest,
    responses(
        (status = 200, description = "Event created with a Meet link", body = CreateMeetResponse),
        (status = 400, description = "Missing field or time not in RFC 3339 format"),
        (status = 401, description = "Authorization header missing or not a bearer token"),
        (status = 500, description = "Google Calendar call failed")
    ),
    tag = "GCal"
)]
fn doc_create_meet() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_get_calendar, doc_create_meet),
    components(schemas(
        CalendarEventsResponse,
        CalendarEntry,
        EventTime,
        CreateMeetRequest,
        CreateMeetResponse
    )),
    tags((name = "GCal", description = "Google Calendar and Meet API"))
)]
pub struct GcalApiDoc;
