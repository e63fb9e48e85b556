//! Feature flag handling for the Huddle gateway.
//!
//! Integrations are gated twice:
//!
//! 1. at compile time by the `gcal`, `slack` and `zoom` cargo features of the
//!    backend, and
//! 2. at runtime by the `use_gcal`, `use_slack` and `use_zoom` config flags.
//!
//! Handlers of a compiled-in but disabled integration answer 503.

use crate::error::{service_disabled, HuddleError};
use huddle_config::AppConfig;

/// Returns `Ok(())` when the runtime flag is on, a 503 error naming the
/// integration otherwise.
pub fn ensure_enabled(enabled: bool, integration: &str) -> Result<(), HuddleError> {
    if enabled {
        Ok(())
    } else {
        Err(service_disabled(format!(
            "{} service is disabled by configuration.",
            integration
        )))
    }
}

/// Check if the Google Calendar integration is enabled at runtime.
#[cfg(feature = "gcal")]
pub fn is_gcal_enabled(config: &AppConfig) -> bool {
    config.use_gcal
}

/// Check if the Slack integration is enabled at runtime.
#[cfg(feature = "slack")]
pub fn is_slack_enabled(config: &AppConfig) -> bool {
    config.use_slack
}

/// Check if the Zoom integration is enabled at runtime.
#[cfg(feature = "zoom")]
pub fn is_zoom_enabled(config: &AppConfig) -> bool {
    config.use_zoom
}

/// Names of the integrations switched on in `config`, for startup logging.
pub fn enabled_integrations(config: &AppConfig) -> Vec<&'static str> {
    [
        ("gcal", config.use_gcal),
        ("slack", config.use_slack),
        ("zoom", config.use_zoom),
    ]
    .into_iter()
    .filter_map(|(name, on)| on.then_some(name))
    .collect()
}
