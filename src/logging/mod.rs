// Logging module - tracing subscriber setup
//
// Diagnostics go to stderr so that stdout only ever carries formatted
// numbers and can be piped safely.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Build the filter directive for a configured level
///
/// Only this crate's events are enabled; dependencies stay silent.
pub fn default_directive(config: &LoggingConfig) -> String {
    format!("numfmt={}", config.level)
}

/// Install the global tracing subscriber
///
/// Precedence: RUST_LOG env var > config level > default "warn"
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(config)))
        .with_context(|| format!("invalid log level {:?}", config.level))?;

    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init(),
    };

    installed.context("failed to install tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_scopes_to_crate() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(default_directive(&config), "numfmt=debug");
    }

    #[test]
    fn test_default_directive_parses() {
        let directive = default_directive(&LoggingConfig::default());
        assert!(EnvFilter::try_new(directive).is_ok());
    }

    // Only test that installs the global subscriber
    #[test]
    fn test_init_json_subscriber() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: LogFormat::Json,
        };
        assert!(init(&config).is_ok());

        tracing::debug!(target: "numfmt", "json subscriber installed");
    }
}
