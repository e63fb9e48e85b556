use axum::{
    body::Body,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, CONTENT_TYPE, ORIGIN,
        },
        Request, StatusCode,
    },
    Router,
};
use huddle_backend::{app_state::AppState, build_router};
use huddle_config::AppConfig;
use huddle_tokens::TokenStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn config() -> Arc<AppConfig> {
    let mut config = AppConfig::minimal("127.0.0.1", 0);
    config.use_slack = true;
    config.use_gcal = true;
    config.use_zoom = true;
    Arc::new(config)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = build_router(&AppState::new(config()));

    for path in ["/health", "/health/google"] {
        let (status, body) = send(
            &app,
            Request::builder().uri(path).body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }
}

#[tokio::test]
async fn test_save_token_then_read_back_from_shared_store() {
    let store = Arc::new(TokenStore::new());
    let state = AppState::builder(config())
        .with_token_store(store.clone())
        .build();
    let app = build_router(&state);

    let (status, body) = send(
        &app,
        post_json("/api/token", json!({ "userId": "alice", "token": "tok-A" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Token saved successfully");

    send(
        &app,
        post_json("/api/token", json!({ "userId": "bob", "token": "tok-B" })),
    )
    .await;

    assert_eq!(store.get("alice"), Some("tok-A".to_string()));
    assert_eq!(store.get("carol"), None);
}

#[tokio::test]
async fn test_save_token_rejects_missing_fields() {
    let app = build_router(&AppState::new(config()));

    let (status, body) = send(&app, post_json("/api/token", json!({ "userId": "alice" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "token is required");
}

#[cfg(feature = "gcal")]
#[tokio::test]
async fn test_calendar_requires_bearer_token() {
    let app = build_router(&AppState::new(config()));

    let (status, body) = send(
        &app,
        Request::builder()
            .uri("/api/calendar")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "No authorization header");
}

#[cfg(feature = "zoom")]
#[tokio::test]
async fn test_zoom_without_credentials() {
    let app = build_router(&AppState::new(config()));

    let (status, body) = send(
        &app,
        post_json(
            "/api/zoom/create",
            json!({ "title": "Retro", "startTime": "2025-05-02T14:30:00Z", "duration": 30 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Zoom API credentials not configured");
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let app = build_router(&AppState::new(config()));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/token")
                .header(ORIGIN, "http://localhost:3000")
                .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let app = build_router(&AppState::new(config()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(ORIGIN, "http://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response
        .headers()
        .get(ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[cfg(feature = "slack")]
mod slack {
    use super::*;
    use huddle_common::services::{BoxFuture, ChatPostResult, ChatService};
    use huddle_slack::service::SlackError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingChat {
        tokens: Mutex<Vec<String>>,
    }

    impl ChatService for RecordingChat {
        type Error = SlackError;

        fn post_message(
            &self,
            access_token: &str,
            channel: &str,
            _text: &str,
        ) -> BoxFuture<'_, ChatPostResult, Self::Error> {
            self.tokens.lock().unwrap().push(access_token.to_string());
            let channel = channel.to_string();
            Box::pin(async move {
                Ok(ChatPostResult {
                    channel,
                    ts: "1.0".to_string(),
                })
            })
        }
    }

    #[tokio::test]
    async fn test_notify_uses_token_saved_through_api() {
        let chat = Arc::new(RecordingChat::default());
        let state = AppState::builder(config())
            .with_chat_service(chat.clone())
            .build();
        let app = build_router(&state);

        let (status, body) = send(
            &app,
            post_json(
                "/api/slack/notify",
                json!({ "userId": "alice", "channel": "#general", "message": "hi" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Token not found for user");

        send(
            &app,
            post_json("/api/token", json!({ "userId": "alice", "token": "xoxp-alice" })),
        )
        .await;

        let (status, body) = send(
            &app,
            post_json(
                "/api/slack/notify",
                json!({ "userId": "alice", "channel": "#general", "message": "hi" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Slack notification sent successfully");
        assert_eq!(*chat.tokens.lock().unwrap(), vec!["xoxp-alice".to_string()]);
    }
}
