//! Environment variable handling for the Huddle gateway.
//!
//! Config values come from `HUDDLE__SECTION__KEY` style variables. Secrets
//! marked `"secret_from_env"` in a config file are looked up under
//! `HUDDLE_SECRET_SECTION_KEY` first and then under the provider's
//! conventional name (`ZOOM_API_KEY`, `SLACK_CLIENT_SECRET`, ...).

use std::env;

use serde_json::Value;
use tracing::warn;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "HUDDLE";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "HUDDLE_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Placeholder value in config files that is replaced from the environment.
pub const SECRET_MARKER: &str = "secret_from_env";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// `"server.host"` becomes `"HUDDLE__SERVER__HOST"`.
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Convert a secret path to an environment variable name
///
/// `"zoom.api_secret"` becomes `"HUDDLE_SECRET_ZOOM_API_SECRET"`.
pub fn secret_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', SECRET_SEPARATOR);
    format!("{}{}{}", SECRET_PREFIX, SECRET_SEPARATOR, path).to_uppercase()
}

/// Convert a path to the provider's conventional variable name
///
/// `"zoom.api_key"` becomes `"ZOOM_API_KEY"`.
pub fn legacy_secret_path_to_env_var(path: &str) -> String {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.len() < 2 {
        return path.to_uppercase();
    }

    let service = parts[0];
    let key = parts[1..].join(SECRET_SEPARATOR);
    format!("{}_{}", service, key).to_uppercase()
}

/// Get an environment variable for a configuration path, falling back to the
/// conventional name.
pub fn get_config_env_var(path: &str) -> Option<String> {
    env::var(config_path_to_env_var(path))
        .or_else(|_| env::var(legacy_secret_path_to_env_var(path)))
        .ok()
}

/// Get an environment variable for a secret path, falling back to the
/// conventional name.
pub fn get_secret_env_var(path: &str) -> Option<String> {
    env::var(secret_path_to_env_var(path))
        .or_else(|_| env::var(legacy_secret_path_to_env_var(path)))
        .ok()
}

/// Paths containing "secret", "key", "password" or "token" are secrets.
pub fn is_secret_path(path: &str) -> bool {
    let path_lower = path.to_lowercase();
    path_lower.contains("secret")
        || path_lower.contains("key")
        || path_lower.contains("password")
        || path_lower.contains("token")
}

/// Get an environment variable for a path, secret or not.
pub fn get_env_var(path: &str) -> Option<String> {
    if is_secret_path(path) {
        get_secret_env_var(path)
    } else {
        get_config_env_var(path)
    }
}

/// Inject environment variables into a JSON value
///
/// Every `"secret_from_env"` string is replaced with the value found for its
/// path. Markers with no matching variable become `null`, so optional
/// credentials read as absent instead of as the literal marker.
///
/// Returns `true` if any value was replaced from the environment.
pub fn inject_env_vars(value: &mut Value) -> bool {
    fn walk(path: &mut Vec<String>, obj: &mut Value) -> bool {
        let mut replaced = false;

        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    path.push(k.clone());
                    replaced |= walk(path, v);
                    path.pop();
                }
            }
            Value::Array(arr) => {
                for (i, v) in arr.iter_mut().enumerate() {
                    path.push(i.to_string());
                    replaced |= walk(path, v);
                    path.pop();
                }
            }
            _ => {}
        }

        if obj.as_str() == Some(SECRET_MARKER) {
            let path_str = path.join(".");
            *obj = match get_env_var(&path_str) {
                Some(env_val) => {
                    replaced = true;
                    Value::String(env_val)
                }
                None => {
                    warn!("env var for {} not found, leaving it unset", path_str);
                    Value::Null
                }
            };
        }

        replaced
    }

    walk(&mut Vec::new(), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_path_to_env_var() {
        assert_eq!(config_path_to_env_var("server.host"), "HUDDLE__SERVER__HOST");
        assert_eq!(
            config_path_to_env_var("zoom.api_base_url"),
            "HUDDLE__ZOOM__API_BASE_URL"
        );
    }

    #[test]
    fn test_secret_path_to_env_var() {
        assert_eq!(
            secret_path_to_env_var("zoom.api_secret"),
            "HUDDLE_SECRET_ZOOM_API_SECRET"
        );
        assert_eq!(
            secret_path_to_env_var("slack.client_secret"),
            "HUDDLE_SECRET_SLACK_CLIENT_SECRET"
        );
    }

    #[test]
    fn test_legacy_secret_path_to_env_var() {
        assert_eq!(legacy_secret_path_to_env_var("zoom.api_key"), "ZOOM_API_KEY");
        assert_eq!(
            legacy_secret_path_to_env_var("slack.client_id"),
            "SLACK_CLIENT_ID"
        );
        assert_eq!(legacy_secret_path_to_env_var("standalone"), "STANDALONE");
    }

    #[test]
    fn test_is_secret_path() {
        assert!(is_secret_path("zoom.api_key"));
        assert!(is_secret_path("zoom.api_secret"));
        assert!(is_secret_path("slack.client_secret"));
        assert!(!is_secret_path("server.host"));
        assert!(!is_secret_path("slack.client_id"));
    }

    #[test]
    fn test_inject_env_vars_replaces_and_nulls_markers() {
        std::env::set_var("HUDDLE_SECRET_ZOOM_TEST_ONLY_SECRET", "from-env");
        std::env::remove_var("HUDDLE_SECRET_ZOOM_TEST_ONLY_KEY");
        std::env::remove_var("ZOOM_TEST_ONLY_KEY");

        let mut value = json!({
            "zoom": {
                "test_only_secret": "secret_from_env",
                "test_only_key": "secret_from_env",
                "api_base_url": "https://api.zoom.us/v2"
            }
        });

        assert!(inject_env_vars(&mut value));
        assert_eq!(value["zoom"]["test_only_secret"], json!("from-env"));
        assert_eq!(value["zoom"]["test_only_key"], Value::Null);
        assert_eq!(value["zoom"]["api_base_url"], json!("https://api.zoom.us/v2"));
    }
}
