// --- File: crates/huddle_zoom/src/zoom_token.rs ---
//! Signing of Zoom JWT-app tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::service::ZoomError;

/// Claims of a Zoom JWT-app token.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ZoomClaims {
    pub iss: String, // API key
    pub exp: i64,
    pub iat: i64,
    pub aud: String,
    #[serde(rename = "appKey")]
    pub app_key: String,
    #[serde(rename = "tokenExp")]
    pub token_exp: i64,
    pub alg: String,
}

pub const ZOOM_AUDIENCE: &str = "zoom";

/// Signs an HS256 token for the Zoom REST API, valid for `ttl_secs`.
pub fn generate_zoom_jwt(
    api_key: &str,
    api_secret: &str,
    ttl_secs: i64,
) -> Result<String, ZoomError> {
    let now = Utc::now();
    let exp = Duration::try_seconds(ttl_secs)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or(ZoomError::InvalidTokenTtl(ttl_secs))?
        .timestamp();

    let claims = ZoomClaims {
        iss: api_key.to_string(),
        exp,
        iat: now.timestamp(),
        aud: ZOOM_AUDIENCE.to_string(),
        app_key: api_key.to_string(),
        token_exp: exp,
        alg: "HS256".to_string(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(api_secret.as_bytes()),
    )?;
    Ok(token)
}
