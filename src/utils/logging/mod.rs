//! Logging utilities
//!
//! Subscriber setup for applications that embed window telemetry. The
//! primitives themselves only emit `tracing` events.

use crate::utils::error::{Result, TelemetryError};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted by [`init_logging_from_env`]
pub const LOG_ENV_VAR: &str = "WINDOW_TELEMETRY_LOG";

/// Install a global fmt subscriber with a fixed maximum level.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| TelemetryError::config(format!("Failed to initialize logging: {}", e)))
}

/// Install a global fmt subscriber filtered by `WINDOW_TELEMETRY_LOG`,
/// falling back to `info`.
pub fn init_logging_from_env() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| TelemetryError::config(format!("Failed to initialize logging: {}", e)))
}
