//! # window-telemetry
//!
//! Thread-safe sliding-window telemetry primitives with bounded memory.
//!
//! ## Features
//!
//! - **EventRecorder**: one timestamp per event, counted over a trailing window
//! - **Counter**: per-millisecond aggregated counts, summed over a trailing window
//! - **Opportunistic eviction**: each insert drops at most one stale entry, so
//!   inserts stay O(1)
//! - **Registry**: application-owned set of named windows, built from YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use window_telemetry::{Counter, EventRecorder};
//!
//! let requests = Counter::new("requests", 60_000)?;
//! requests.inc(Some(1_000));
//! requests.inc(Some(1_000));
//! requests.inc(Some(1_500));
//! assert_eq!(requests.total(Some(1_500), None)?, 3);
//!
//! let failures = EventRecorder::new("auth_failures", 10_000)?;
//! failures.record(Some(1_000));
//! assert_eq!(failures.get_count(Some(12_000), None)?, 0);
//! # Ok::<(), window_telemetry::TelemetryError>(())
//! ```
//!
//! ## Registry from configuration
//!
//! ```rust
//! use window_telemetry::TelemetryConfig;
//!
//! let config = TelemetryConfig::from_yaml_str(
//!     "counters:\n  - name: requests\n    retention_millis: 60000\n",
//! )?;
//! let registry = config.build_registry()?;
//! registry.counter("requests")?.inc(None);
//! # Ok::<(), window_telemetry::TelemetryError>(())
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod telemetry;
pub mod utils;

// Re-export main types
pub use config::{TelemetryConfig, Validate, WindowConfig};
pub use telemetry::{
    Clock, Counter, CounterEntry, CounterSnapshot, DEFAULT_RETENTION_MILLIS, EventRecorder,
    MAX_RETENTION_MILLIS, ManualClock, RecorderSnapshot, SystemClock, TelemetryRegistry,
    TelemetrySnapshot,
};
pub use utils::error::{Result, TelemetryError};
