// --- File: crates/huddle_common/src/lib.rs ---

pub mod error; // Error handling
pub mod features; // Runtime feature checks
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod routes; // Health routes
pub mod services; // Service abstractions

pub use routes::routes;

pub use error::{
    auth_error, config_error, external_service_error, not_found, require_field, service_disabled,
    validation_error, Context, HttpStatusCode, HuddleError,
};

pub use http::{
    bearer_token,
    client::{client_with_timeout, create_client, HTTP_CLIENT},
    json_body,
};

pub use logging::{init, init_with_config, init_with_level, log_error, log_result};

pub use features::{enabled_integrations, ensure_enabled};

#[cfg(feature = "gcal")]
pub use features::is_gcal_enabled;

#[cfg(feature = "slack")]
pub use features::is_slack_enabled;

#[cfg(feature = "zoom")]
pub use features::is_zoom_enabled;
