//! Structured logging configuration.

use crate::config::LoggingSettings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// Line-delimited JSON output.
    Json,
}

impl LogFormat {
    /// Parses a format string, defaulting to pretty.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Resolved logging configuration.
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Optional log file; stderr when absent.
    pub file: Option<PathBuf>,
    /// Level filter.
    pub filter: EnvFilter,
}

impl LoggingConfig {
    /// Builds a configuration from optional file settings with env overrides.
    ///
    /// Precedence for the filter: `RUST_LOG`, then the configured filter,
    /// then `debug`/`info` depending on `verbose`.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        let fallback = if verbose { "debug" } else { "info" };
        let configured = settings.and_then(|s| s.filter.clone());
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            configured.map_or_else(
                || EnvFilter::new(fallback),
                |expr| EnvFilter::try_new(expr).unwrap_or_else(|_| EnvFilter::new(fallback)),
            )
        });

        Self {
            format: settings
                .and_then(|s| s.format.as_deref())
                .map(LogFormat::parse)
                .unwrap_or_default(),
            file: settings.and_then(|s| s.file.clone()),
            filter,
        }
    }
}
