//! Configuration for the formatter
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/numfmt/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! Command-line flags are applied on top by the binary.

use anyhow::{Context, Result};
use num_format::Locale;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::format::{resolve_locale, system_locale, NumberFormatter, DEFAULT_PRECISION};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;


pub use observability::{FileLogging, LogFormat, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Locale name ("de", "en_IN.UTF-8"); None means the host locale
    pub locale: Option<String>,

    /// Maximum fraction digits for plain formatting
    pub precision: usize,

    /// Abbreviate thousands and millions with K/M
    pub abbreviate: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: None,
            precision: DEFAULT_PRECISION,
            abbreviate: false,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every key is optional
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub locale: Option<String>,
    pub precision: Option<usize>,
    pub abbreviate: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/numfmt/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("numfmt").join("config.toml"))
    }

    /// Load configuration: env vars -> file -> defaults
    ///
    /// A config file that exists but can't be read or parsed is an error,
    /// not a silent fallback to defaults.
    pub fn from_env() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::read_file_config(&path)?,
            None => FileConfig::default(),
        };

        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Load one config file with no environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::resolve(Self::read_file_config(path)?, |_| None))
    }

    /// Read a config file; a missing file yields defaults
    pub(crate) fn read_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("cannot read config file {}", path.display()))
            }
        }
    }

    /// Merge env (via `env`) over file values over defaults
    pub(crate) fn resolve<F>(file: FileConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // Locale: env > file > host locale (None)
        let locale = env("NUMFMT_LOCALE")
            .filter(|v| !v.is_empty())
            .or(file.locale);

        // Precision: env > file > default; unparsable env values are ignored
        let precision = env("NUMFMT_PRECISION")
            .and_then(|v| v.trim().parse().ok())
            .or(file.precision)
            .unwrap_or(defaults.precision);

        // Abbreviate: env > file > default; unrecognized env values are ignored
        let abbreviate = env("NUMFMT_ABBREVIATE")
            .and_then(|v| parse_flag(&v))
            .or(file.abbreviate)
            .unwrap_or(defaults.abbreviate);

        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(level) = env("NUMFMT_LOG_LEVEL").filter(|v| !v.is_empty()) {
            logging.level = level;
        }

        Self {
            locale,
            precision,
            abbreviate,
            logging,
        }
    }

    /// The configured locale, or the host locale when none is set
    pub fn effective_locale(&self) -> Result<Locale> {
        match &self.locale {
            Some(name) => resolve_locale(name).context("invalid locale setting"),
            None => Ok(system_locale()),
        }
    }

    /// Build a formatter for the effective locale and precision
    pub fn formatter(&self) -> Result<NumberFormatter> {
        let locale = self.effective_locale()?;

        tracing::debug!(
            locale = locale.name(),
            precision = self.precision,
            "formatter configured"
        );

        Ok(NumberFormatter::new(locale).with_precision(self.precision))
    }

    /// Write the default config template to `path`, creating parent dirs
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create directory {}", parent.display()))?;
        }

        std::fs::write(path, Self::default().to_toml())
            .with_context(|| format!("cannot write config file {}", path.display()))
    }
}

/// Boolean env values: 1/true/yes/on and 0/false/no/off, anything else is None
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
