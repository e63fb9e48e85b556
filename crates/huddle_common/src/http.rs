// --- File: crates/huddle_common/src/http.rs ---
use axum::{
    extract::rejection::JsonRejection,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{auth_error, HuddleError, HttpStatusCode};

// Include the client module
pub mod client;

const BEARER_PREFIX: &str = "Bearer ";

/// Renders the error as `{"error": <client message>, "code": <status>}`.
impl IntoResponse for HuddleError {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(json!({
            "error": self.client_message(),
            "code": status_code.as_u16(),
        }));

        (status_code, body).into_response()
    }
}

/// Unwraps an optional JSON body extraction.
///
/// Handlers take `Result<Json<T>, JsonRejection>` so that malformed bodies and
/// missing content types are reported as 400 with the usual error shape
/// instead of axum's plain-text 415/422 rejections.
pub fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, HuddleError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| HuddleError::ParseError(rejection.body_text()))
}

/// Extracts the bearer token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, HuddleError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| auth_error("No authorization header"))?;
    let value = value
        .to_str()
        .map_err(|_| auth_error("Invalid authorization header format"))?;

    match value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(auth_error("Invalid authorization header format")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::not_found;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extracts_value() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer ya29.token"));
        assert_eq!(bearer_token(&headers).unwrap(), "ya29.token");
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let err = bearer_token(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.client_message(), "No authorization header");
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        let err = bearer_token(&headers).unwrap_err();
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.client_message(), "Invalid authorization header format");
    }

    #[tokio::test]
    async fn test_error_response_body() {
        let response = not_found("Token not found for user").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Token not found for user");
        assert_eq!(body["code"], 404);
    }
}
