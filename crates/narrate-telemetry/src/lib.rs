//! Logging for narrate
//!
//! Installs a `tracing-subscriber` formatter filtered by `RUST_LOG`, the
//! configured filter, or a fallback, in that order

use narrate_config::{LogConfig, LogFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global subscriber
///
/// # Errors
///
/// Returns an error if the configured filter is invalid or a global
/// subscriber is already installed
pub fn init(config: &LogConfig, default_filter: &str) -> anyhow::Result<()> {
    let filter = resolve_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), config, default_filter)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Text => registry.with(fmt_layer).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

/// Pick the filter directive: environment, then configuration, then default
fn resolve_filter(from_env: Option<&str>, config: &LogConfig, default_filter: &str) -> anyhow::Result<EnvFilter> {
    let directive = from_env
        .filter(|value| !value.trim().is_empty())
        .or(config.filter.as_deref())
        .unwrap_or(default_filter);

    EnvFilter::try_new(directive).map_err(|e| anyhow::anyhow!("invalid log filter '{directive}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(filter: Option<&str>) -> LogConfig {
        LogConfig {
            filter: filter.map(str::to_owned),
            format: LogFormat::Text,
        }
    }

    #[test]
    fn environment_wins_over_config() {
        let filter = resolve_filter(Some("tts=trace"), &config(Some("warn")), "info").unwrap();
        assert_eq!(filter.to_string(), "tts=trace");
    }

    #[test]
    fn config_wins_over_default() {
        let filter = resolve_filter(None, &config(Some("warn")), "info").unwrap();
        assert_eq!(filter.to_string(), "warn");

        let filter = resolve_filter(Some(" "), &config(Some("debug")), "info").unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn falls_back_to_default() {
        let filter = resolve_filter(None, &config(None), "info").unwrap();
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn invalid_directive_is_reported() {
        let err = resolve_filter(None, &config(Some("tts=loud")), "info").unwrap_err();
        assert!(err.to_string().starts_with("invalid log filter 'tts=loud'"));
    }
}
