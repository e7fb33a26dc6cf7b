//! Configuration for window telemetry
//!
//! Loads the set of named windows from YAML and turns it into a
//! [`TelemetryRegistry`].
//!
//! ```yaml
//! recorders:
//!   - name: auth_failures
//!     retention_millis: 60000
//! counters:
//!   - name: requests
//!   - name: slow_requests
//!     retention_millis: 10000
//! ```

pub mod models;
pub mod validation;


pub use models::*;
pub use validation::Validate;

use crate::telemetry::{Clock, Counter, EventRecorder, SystemClock, TelemetryRegistry};
use crate::utils::error::{Result, TelemetryError};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

impl TelemetryConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading telemetry configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .map_err(|e| TelemetryError::config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml_str(&content)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: TelemetryConfig = serde_yaml::from_str(content)?;
        config.validate()?;

        debug!(
            "Configuration loaded successfully: {} recorders, {} counters",
            config.recorders.len(),
            config.counters.len()
        );
        Ok(config)
    }

    /// Build a registry of all configured windows on the system clock
    pub fn build_registry(&self) -> Result<TelemetryRegistry> {
        self.build_registry_with_clock(Arc::new(SystemClock))
    }

    /// Build a registry whose windows and snapshots all read `clock`
    pub fn build_registry_with_clock(&self, clock: Arc<dyn Clock>) -> Result<TelemetryRegistry> {
        self.validate()?;

        let registry = TelemetryRegistry::with_clock(Arc::clone(&clock));

        for window in &self.recorders {
            let recorder = EventRecorder::new(window.name.as_str(), window.retention_millis)?
                .with_clock(Arc::clone(&clock));
            registry.register_recorder(recorder)?;
        }

        for window in &self.counters {
            let counter = Counter::with_max_retention(
                window.name.as_str(),
                window.retention_millis,
                window.max_retention_millis,
            )?
            .with_clock(Arc::clone(&clock));
            registry.register_counter(counter)?;
        }

        info!(
            "Telemetry registry ready with {} recorders and {} counters",
            self.recorders.len(),
            self.counters.len()
        );
        Ok(registry)
    }
}
