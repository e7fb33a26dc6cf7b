//! Utility modules for window telemetry
//!
//! - **error**: the crate error type
//! - **logging**: `tracing` subscriber setup

pub mod error;
pub mod logging;

pub use error::{Result, TelemetryError};

/// Get current timestamp in milliseconds since the Unix epoch
pub fn current_timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a millisecond duration as a human readable string
pub fn format_duration(duration_ms: i64) -> String {
    if duration_ms < 1000 {
        format!("{}ms", duration_ms)
    } else if duration_ms < 60_000 {
        format!("{:.1}s", duration_ms as f64 / 1000.0)
    } else if duration_ms < 3_600_000 {
        format!("{:.1}m", duration_ms as f64 / 60_000.0)
    } else {
        format!("{:.1}h", duration_ms as f64 / 3_600_000.0)
    }
}
