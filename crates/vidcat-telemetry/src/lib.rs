//! Process-wide tracing setup shared by the vidcat binaries.

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_log::log::SetLoggerError;
use tracing_log::LogTracer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// Output format of the log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, one event per line.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = TelemetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(TelemetryError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("unknown log format: {0}")]
    UnknownFormat(String),
    #[error("global subscriber already installed: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
    #[error("log bridge already installed: {0}")]
    LogBridge(#[from] SetLoggerError),
}

/// Builds the event filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber and routes `log` records into it.
///
/// Must be called once, before the first event is emitted.
pub fn init(format: LogFormat) -> Result<(), TelemetryError> {
    let registry = tracing_subscriber::registry().with(env_filter());

    match format {
        LogFormat::Text => tracing::subscriber::set_global_default(registry.with(fmt::layer()))?,
        LogFormat::Json => {
            tracing::subscriber::set_global_default(registry.with(fmt::layer().json()))?
        }
    }

    LogTracer::init()?;
    Ok(())
}
