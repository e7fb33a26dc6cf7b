//! Configuration validation

use super::models::{TelemetryConfig, WindowConfig};
use crate::utils::error::{Result, TelemetryError};
use std::collections::HashSet;
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for TelemetryConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating telemetry configuration");

        let mut recorder_names = HashSet::new();
        for recorder in &self.recorders {
            if !recorder_names.insert(&recorder.name) {
                return Err(TelemetryError::config(format!(
                    "Duplicate recorder name: {}",
                    recorder.name
                )));
            }
            validate_window(recorder, None)?;
        }

        let mut counter_names = HashSet::new();
        for counter in &self.counters {
            if !counter_names.insert(&counter.name) {
                return Err(TelemetryError::config(format!(
                    "Duplicate counter name: {}",
                    counter.name
                )));
            }
            if counter.max_retention_millis < 0 {
                return Err(TelemetryError::config(format!(
                    "Counter '{}': max_retention_millis must be >= 0",
                    counter.name
                )));
            }
            validate_window(counter, Some(counter.max_retention_millis))?;
        }

        debug!("Telemetry configuration validation completed");
        Ok(())
    }
}

fn validate_window(window: &WindowConfig, max: Option<i64>) -> Result<()> {
    if window.name.trim().is_empty() {
        return Err(TelemetryError::config("Window name cannot be empty"));
    }

    if window.retention_millis < 0 {
        return Err(TelemetryError::config(format!(
            "Window '{}': retention_millis must be >= 0",
            window.name
        )));
    }

    if let Some(max) = max {
        if window.retention_millis > max {
            return Err(TelemetryError::config(format!(
                "Window '{}': retention_millis {} exceeds maximum {}",
                window.name, window.retention_millis, max
            )));
        }
    }

    Ok(())
}
