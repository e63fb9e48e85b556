// --- File: crates/huddle_slack/src/doc.rs ---
#![cfg(feature = "openapi")]
#![allow(dead_code)]

use crate::handlers::{CallbackQuery, CallbackResponse, MessageResponse, NotifyRequest};
use utoipa::OpenApi;

#[utoipa::path(
    post,
    path = "/slack/notify",
    request_body = NotifyRequest,
    responses(
        (status = 200, description = "Message posted to the channel", body = MessageResponse),
        (status = 400, description = "userId, channel or message missing"),
        (status = 404, description = "No token stored for the user"),
        (status = 500, description = "Slack rejected the message"),
        (status = 503, description = "Slack service disabled by configuration")
    ),
    tag = "Slack"
)]
fn doc_notify() {}

#[utoipa::path(
    get,
    path = "/slack/callback",
    params(CallbackQuery),
    responses(
        (status = 200, description = "Token stored for the user in `state`", body = CallbackResponse),
        (status = 303, description = "Token stored, redirecting to the configured page"),
        (status = 400, description = "Code or state missing"),
        (status = 500, description = "Credentials missing or Slack rejected the code")
    ),
    tag = "Slack"
)]
fn doc_callback() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_notify, doc_callback),
    components(schemas(NotifyRequest, MessageResponse, CallbackResponse)),
    tags((name = "Slack", description = "Slack notifications and install callback"))
)]
pub struct SlackApiDoc;
