//! Sliding-window telemetry primitives
//!
//! [`EventRecorder`] keeps one timestamp per event. [`Counter`] aggregates
//! events that share a millisecond into a single `(timestamp, count)` entry.
//! Both retain entries for a fixed window and evict at most one stale entry
//! per insert, so an insert never does more than O(1) work.

mod bounded;
mod clock;
mod counter;
mod event_recorder;
mod registry;
mod types;


pub use bounded::{DEFAULT_RETENTION_MILLIS, MAX_RETENTION_MILLIS};
pub use clock::{Clock, ManualClock, SystemClock};
pub use counter::Counter;
pub use event_recorder::EventRecorder;
pub use registry::TelemetryRegistry;
pub use types::{CounterEntry, CounterSnapshot, RecorderSnapshot, TelemetrySnapshot};
