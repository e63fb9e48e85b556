//! Logging utilities for the Huddle gateway.
//!
//! Every binary and test calls one of the `init*` functions; they use
//! `try_init`, so repeated calls are harmless.

use huddle_config::LoggingConfig;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default file name prefix for the rolling log file.
pub const DEFAULT_LOG_FILE_PREFIX: &str = "huddle.log";

/// Initialize the tracing subscriber at INFO level.
///
/// ```
/// use huddle_common::logging;
///
/// logging::init();
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
pub fn init_with_level(level: Level) {
    init_with_config(&LoggingConfig {
        level: level.to_string().to_lowercase(),
        ..LoggingConfig::default()
    });
}

/// Initialize the tracing subscriber from the `[logging]` config section.
///
/// `RUST_LOG` directives are honoured; the configured level is applied to
/// the `huddle*` crates and to `tower_http` request tracing. When `file_dir`
/// is set, output is also written to a daily rolling file.
pub fn init_with_config(config: &LoggingConfig) {
    let level = config.level.as_str();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true);

    let file_layer = config.file_dir.as_ref().map(|dir| {
        let prefix = config
            .file_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE_PREFIX.to_string());
        fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(tracing_appender::rolling::daily(dir, prefix))
    });

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

fn default_directives(level: &str) -> String {
    [
        "huddle",
        "huddle_backend",
        "huddle_common",
        "huddle_config",
        "huddle_tokens",
        "huddle_slack",
        "huddle_gcal",
        "huddle_zoom",
        "tower_http",
    ]
    .iter()
    .map(|target| format!("{}={}", target, level))
    .collect::<Vec<_>>()
    .join(",")
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result, so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_cover_all_crates() {
        let directives = default_directives("debug");
        assert!(directives.contains("huddle_tokens=debug"));
        assert!(directives.contains("tower_http=debug"));
        assert!(directives.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_level(Level::DEBUG);
    }
}
