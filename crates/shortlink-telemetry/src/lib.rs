//! Tracing subscriber setup shared by the shortlink binaries.

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Output format of the log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, one event per line.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Builds the event filter from `RUST_LOG`, falling back to `default_filter`.
pub fn env_filter(default_filter: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| TelemetryError::InvalidFilter(e.to_string())),
    }
}

/// Installs the global tracing subscriber. Call once, at startup.
pub fn init(format: LogFormat) -> Result<(), TelemetryError> {
    let filter = env_filter(DEFAULT_FILTER)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().flatten_event(true).with_current_span(false))
            .try_init(),
    };

    result.map_err(|e| TelemetryError::Install(e.to_string()))
}
