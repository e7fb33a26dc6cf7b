//! Retention limits and argument validation shared by both primitives

use crate::utils::error::{Result, TelemetryError};
use tracing::warn;

/// Retention used when none is given (5 minutes)
pub const DEFAULT_RETENTION_MILLIS: i64 = 300_000;

/// Upper bound on counter retention and counter query timespans (5 minutes)
pub const MAX_RETENTION_MILLIS: i64 = 300_000;

/// Check a retention window, optionally against an upper bound
pub(super) fn validate_retention(name: &str, retention_millis: i64, max: Option<i64>) -> Result<()> {
    check_range(name, "retention_millis", retention_millis, max)
}

/// Check the cap a counter applies to its retention and timespans
pub(super) fn validate_max_retention(name: &str, max_retention_millis: i64) -> Result<()> {
    check_range(name, "max_retention_millis", max_retention_millis, None)
}

/// Check a query timespan, optionally against an upper bound
pub(super) fn validate_timespan(name: &str, timespan_millis: i64, max: Option<i64>) -> Result<()> {
    check_range(name, "timespan_millis", timespan_millis, max)
}

fn check_range(name: &str, field: &str, value: i64, max: Option<i64>) -> Result<()> {
    if value < 0 {
        warn!(window = name, field, value, "rejected negative argument");
        return Err(TelemetryError::invalid_argument(format!(
            "{} for '{}' must be >= 0, got {}",
            field, name, value
        )));
    }

    if let Some(max) = max {
        if value > max {
            warn!(window = name, field, value, max, "rejected argument above maximum");
            return Err(TelemetryError::invalid_argument(format!(
                "{} for '{}' must be <= {}, got {}",
                field, name, max, value
            )));
        }
    }

    Ok(())
}

/// Requests per second given a count over a millisecond span
pub(super) fn per_second(count: u64, timespan_millis: i64) -> f64 {
    if timespan_millis <= 0 {
        return 0.0;
    }
    count as f64 * 1000.0 / timespan_millis as f64
}
