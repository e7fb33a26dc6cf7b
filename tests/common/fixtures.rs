//! Test fixtures

use std::sync::Arc;
use window_telemetry::{ManualClock, TelemetryConfig, TelemetryRegistry};

/// YAML used by the registry tests
pub const SAMPLE_CONFIG: &str = r#"
recorders:
  - name: auth_failures
    retention_millis: 1000
counters:
  - name: requests
    retention_millis: 1000
  - name: errors
    retention_millis: 500
"#;

/// Registry built from [`SAMPLE_CONFIG`] together with the clock it reads
pub struct ClockedRegistry {
    pub clock: Arc<ManualClock>,
    pub registry: TelemetryRegistry,
}

impl ClockedRegistry {
    pub fn from_sample(start_millis: i64) -> Self {
        Self::from_yaml(SAMPLE_CONFIG, start_millis)
    }

    pub fn from_yaml(yaml: &str, start_millis: i64) -> Self {
        let clock = Arc::new(ManualClock::new(start_millis));
        let config = TelemetryConfig::from_yaml_str(yaml).expect("sample config is valid");
        let registry = config
            .build_registry_with_clock(clock.clone())
            .expect("sample config builds");

        Self { clock, registry }
    }
}

/// Turn a start time and gaps into absolute, non-decreasing timestamps
pub fn non_decreasing_times(start: i64, gaps: &[i64]) -> Vec<i64> {
    gaps.iter()
        .scan(start, |now, gap| {
            *now += gap;
            Some(*now)
        })
        .collect()
}
