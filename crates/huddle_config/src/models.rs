// --- File: crates/huddle_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- CORS Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

// --- Logging Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for a daily rolling log file. Stdout only when unset.
    #[serde(default)]
    pub file_dir: Option<String>,
    #[serde(default)]
    pub file_prefix: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_dir: None,
            file_prefix: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

// --- Google Calendar Config ---
// The caller's bearer token authenticates every call; nothing secret lives here.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GcalConfig {
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,
    #[serde(default = "default_max_results")]
    pub max_results: i32,
    /// Overrides the Calendar API base URL (e.g. a local stub).
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for GcalConfig {
    fn default() -> Self {
        Self {
            calendar_id: default_calendar_id(),
            max_results: default_max_results(),
            base_url: None,
        }
    }
}

fn default_calendar_id() -> String {
    "primary".to_string()
}

fn default_max_results() -> i32 {
    10
}

// --- Slack Config ---
// client_secret is normally "secret_from_env" -> SLACK_CLIENT_SECRET
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SlackConfig {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    #[serde(default)]
    pub redirect_uri: Option<String>,
    #[serde(default = "default_slack_api_base_url")]
    pub api_base_url: String,
    /// Where the OAuth callback redirects the browser after storing the token.
    #[serde(default)]
    pub post_install_redirect: Option<String>,
    #[serde(default = "default_slack_timeout_secs")]
    pub timeout_secs: u64,
}

impl SlackConfig {
    /// Returns the OAuth client id/secret pair when both are present and non-empty.
    pub fn client_credentials(&self) -> Option<(&str, &str)> {
        match (self.client_id.as_deref(), self.client_secret.as_deref()) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => Some((id, secret)),
            _ => None,
        }
    }
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            redirect_uri: None,
            api_base_url: default_slack_api_base_url(),
            post_install_redirect: None,
            timeout_secs: default_slack_timeout_secs(),
        }
    }
}

fn default_slack_api_base_url() -> String {
    "https://slack.com/api".to_string()
}

fn default_slack_timeout_secs() -> u64 {
    30
}

// --- Zoom Config ---
// api_key / api_secret are normally "secret_from_env" -> ZOOM_API_KEY / ZOOM_API_SECRET
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ZoomConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_secret: Option<String>,
    #[serde(default = "default_zoom_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_zoom_token_ttl_secs")]
    pub token_ttl_secs: i64,
    #[serde(default = "default_zoom_timeout_secs")]
    pub timeout_secs: u64,
}

impl ZoomConfig {
    /// Returns the key/secret pair when both are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.api_key.as_deref(), self.api_secret.as_deref()) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => {
                Some((key, secret))
            }
            _ => None,
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            api_base_url: default_zoom_api_base_url(),
            token_ttl_secs: default_zoom_token_ttl_secs(),
            timeout_secs: default_zoom_timeout_secs(),
        }
    }
}

fn default_zoom_api_base_url() -> String {
    "https://api.zoom.us/v2".to_string()
}

fn default_zoom_token_ttl_secs() -> i64 {
    24 * 60 * 60
}

fn default_zoom_timeout_secs() -> u64 {
    10
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_gcal: bool,
    #[serde(default)]
    pub use_slack: bool,
    #[serde(default)]
    pub use_zoom: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub gcal: Option<GcalConfig>,
    #[serde(default)]
    pub slack: Option<SlackConfig>,
    #[serde(default)]
    pub zoom: Option<ZoomConfig>,
}

impl AppConfig {
    /// A config with every integration disabled, bound to localhost.
    pub fn minimal(host: &str, port: u16) -> Self {
        Self {
            server: ServerConfig {
                host: host.to_string(),
                port,
            },
            cors: CorsConfig::default(),
            logging: LoggingConfig::default(),
            use_gcal: false,
            use_slack: false,
            use_zoom: false,
            gcal: None,
            slack: None,
            zoom: None,
        }
    }
}
