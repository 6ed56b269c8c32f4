//! Logging utilities for the panel core
//!
//! Thin setup layer over `tracing`. The crate itself only emits events (denied
//! permission checks at debug, converter fallbacks at warn); embedding
//! applications decide whether and how to subscribe, either through
//! [`init_logger`] or their own subscriber.

use crate::utils::error::{PanelError, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log verbosity accepted by [`init_logger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber`
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(PanelError::validation(format!("Invalid log level: {}", s))),
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// The `SEGTRACK_LOG` environment variable takes precedence over the explicit
/// level so deployments can tune verbosity without a code change. Fails if a
/// subscriber is already installed.
pub fn init_logger(level: Option<LogLevel>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .try_init()
        .map_err(|e| PanelError::config(format!("Failed to install subscriber: {}", e)))
}

/// Initialize the global subscriber with JSON-formatted output.
///
/// Intended for deployments that ship logs to an aggregator; the same
/// `SEGTRACK_LOG` precedence as [`init_logger`] applies.
pub fn init_json_logger(level: Option<LogLevel>) -> Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(level))
        .with_current_span(false)
        .try_init()
        .map_err(|e| PanelError::config(format!("Failed to install subscriber: {}", e)))
}

fn env_filter(level: Option<LogLevel>) -> EnvFilter {
    let fallback = level.unwrap_or(LogLevel::Info);
    EnvFilter::try_from_env("SEGTRACK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(fallback.as_directive()))
}
