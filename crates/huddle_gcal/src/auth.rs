// File: crates/huddle_gcal/src/auth.rs
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    CalendarHub,
};

use crate::service::GcalError;

type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

/// Builds a Calendar client that authenticates as the caller.
///
/// The access token is sent as-is on every request; it is never refreshed.
/// `base_url` replaces the public API root (tests point it at a local stub).
pub fn create_calendar_hub(access_token: &str, base_url: Option<&str>) -> Result<HubType, GcalError> {
    let https = HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| GcalError::Client(e.to_string()))?
        .https_or_http()
        .enable_http1()
        .build();

    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    let mut hub = CalendarHub::new(client, access_token.to_string());
    if let Some(base_url) = base_url {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        hub.base_url(base_url);
    }

    Ok(hub)
}
