// --- File: crates/huddle_tokens/src/doc.rs ---
#![cfg(feature = "openapi")]
#![allow(dead_code)]

use crate::handlers::{MessageResponse, SaveTokenRequest};
use utoipa::OpenApi;

#[utoipa::path(
    post,
    path = "/token",
    request_body = SaveTokenRequest,
    responses(
        (status = 200, description = "Token stored for the user", body = MessageResponse),
        (status = 400, description = "userId or token missing, or malformed JSON")
    ),
    tag = "Tokens"
)]
fn doc_save_token() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_save_token),
    components(schemas(SaveTokenRequest, MessageResponse)),
    tags((name = "Tokens", description = "Per-user token registration"))
)]
pub struct TokensApiDoc;
