// --- File: crates/huddle_common/src/http/client.rs ---
use once_cell::sync::Lazy;
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A shared HTTP client with the default timeout.
///
/// Building a reqwest client only fails when the TLS backend cannot be
/// initialised, which leaves nothing to fall back to.
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
});

/// Creates a new HTTP client with custom configuration.
///
/// # Arguments
///
/// * `timeout_secs` - The timeout in seconds for the client
/// * `follow_redirects` - Whether the client should follow redirects
pub fn create_client(timeout_secs: u64, follow_redirects: bool) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(if follow_redirects {
            reqwest::redirect::Policy::default()
        } else {
            reqwest::redirect::Policy::none()
        })
        .build()
}

/// Creates a client with the given timeout, falling back to the shared client
/// if the builder fails.
pub fn client_with_timeout(timeout_secs: u64) -> Client {
    create_client(timeout_secs, true).unwrap_or_else(|err| {
        tracing::warn!(
            "Failed to build HTTP client with {}s timeout, using shared client: {}",
            timeout_secs,
            err
        );
        HTTP_CLIENT.clone()
    })
}
