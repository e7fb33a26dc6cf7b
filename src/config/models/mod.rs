//! Configuration data models

use crate::telemetry::{DEFAULT_RETENTION_MILLIS, MAX_RETENTION_MILLIS};
use serde::{Deserialize, Serialize};

/// Named windows to create at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Event recorders
    #[serde(default)]
    pub recorders: Vec<WindowConfig>,
    /// Counters
    #[serde(default)]
    pub counters: Vec<WindowConfig>,
}

/// A single named window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Registry name
    pub name: String,
    /// Retention in milliseconds
    #[serde(default = "default_retention_millis")]
    pub retention_millis: i64,
    /// Cap on retention and query timespans; only used by counters
    #[serde(default = "default_max_retention_millis")]
    pub max_retention_millis: i64,
}

impl WindowConfig {
    pub fn new(name: impl Into<String>, retention_millis: i64) -> Self {
        Self {
            name: name.into(),
            retention_millis,
            max_retention_millis: default_max_retention_millis(),
        }
    }
}

/// Default retention (5 minutes)
pub fn default_retention_millis() -> i64 {
    DEFAULT_RETENTION_MILLIS
}

/// Default counter retention cap (5 minutes)
pub fn default_max_retention_millis() -> i64 {
    MAX_RETENTION_MILLIS
}
