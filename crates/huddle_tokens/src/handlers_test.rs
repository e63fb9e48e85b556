#[cfg(test)]
mod tests {
    use crate::routes::routes;
    use crate::store::TokenStore;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn post_json(app: Router, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/token")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_save_token_stores_value() {
        let store = Arc::new(TokenStore::new());
        let body = json!({ "userId": "alice", "token": "xoxp-1" }).to_string();

        let (status, body) = post_json(routes(store.clone()), body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Token saved successfully");
        assert_eq!(store.get("alice"), Some("xoxp-1".to_string()));
    }

    #[tokio::test]
    async fn test_save_token_missing_user_id() {
        let store = Arc::new(TokenStore::new());
        let body = json!({ "token": "xoxp-1" }).to_string();

        let (status, body) = post_json(routes(store.clone()), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "userId is required");
        assert_eq!(body["code"], 400);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_save_token_empty_token() {
        let store = Arc::new(TokenStore::new());
        let body = json!({ "userId": "alice", "token": "" }).to_string();

        let (status, body) = post_json(routes(store.clone()), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "token is required");
        assert_eq!(store.get("alice"), None);
    }

    #[tokio::test]
    async fn test_save_token_whitespace_values_are_stored_verbatim() {
        let store = Arc::new(TokenStore::new());
        let body = json!({ "userId": " ", "token": "  " }).to_string();

        let (status, body) = post_json(routes(store.clone()), body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Token saved successfully");
        assert_eq!(store.get(" "), Some("  ".to_string()));
    }

    #[tokio::test]
    async fn test_save_token_malformed_json() {
        let store = Arc::new(TokenStore::new());

        let (status, body) = post_json(routes(store), "{not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_save_token_overwrites() {
        let store = Arc::new(TokenStore::new());
        store.set("alice", "old");
        let body = json!({ "userId": "alice", "token": "new" }).to_string();

        let (status, _) = post_json(routes(store.clone()), body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(store.get("alice"), Some("new".to_string()));
    }
}
