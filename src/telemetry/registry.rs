//! Application-owned collection of named windows

use super::clock::{Clock, SystemClock};
use super::counter::Counter;
use super::event_recorder::EventRecorder;
use super::types::TelemetrySnapshot;
use crate::utils::error::{Result, TelemetryError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Named recorders and counters shared across call sites.
///
/// Recorders and counters live in separate namespaces, so a recorder and a
/// counter may share a name.
#[derive(Debug)]
pub struct TelemetryRegistry {
    clock: Arc<dyn Clock>,
    recorders: RwLock<HashMap<String, Arc<EventRecorder>>>,
    counters: RwLock<HashMap<String, Arc<Counter>>>,
}

impl Default for TelemetryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryRegistry {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Registry whose snapshots are evaluated against `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            recorders: RwLock::new(HashMap::new()),
            counters: RwLock::new(HashMap::new()),
        }
    }

    /// Take ownership of a recorder and hand back a shared handle
    pub fn register_recorder(&self, recorder: EventRecorder) -> Result<Arc<EventRecorder>> {
        let mut recorders = self.recorders.write();
        if recorders.contains_key(recorder.name()) {
            return Err(TelemetryError::already_registered(format!(
                "event recorder '{}'",
                recorder.name()
            )));
        }

        let name = recorder.name().to_string();
        let recorder = Arc::new(recorder);
        recorders.insert(name.clone(), Arc::clone(&recorder));
        debug!("Registered event recorder '{}'", name);

        Ok(recorder)
    }

    /// Take ownership of a counter and hand back a shared handle
    pub fn register_counter(&self, counter: Counter) -> Result<Arc<Counter>> {
        let mut counters = self.counters.write();
        if counters.contains_key(counter.name()) {
            return Err(TelemetryError::already_registered(format!(
                "counter '{}'",
                counter.name()
            )));
        }

        let name = counter.name().to_string();
        let counter = Arc::new(counter);
        counters.insert(name.clone(), Arc::clone(&counter));
        debug!("Registered counter '{}'", name);

        Ok(counter)
    }

    pub fn recorder(&self, name: &str) -> Result<Arc<EventRecorder>> {
        self.recorders
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| TelemetryError::not_found(format!("event recorder '{}'", name)))
    }

    pub fn counter(&self, name: &str) -> Result<Arc<Counter>> {
        self.counters
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| TelemetryError::not_found(format!("counter '{}'", name)))
    }

    /// Sorted recorder names
    pub fn recorder_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.recorders.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Sorted counter names
    pub fn counter_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.counters.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Evaluate every window at `current_time`, or now.
    ///
    /// All windows see the same instant. Each window is locked only while it
    /// is read, so the snapshot is consistent per window, not across windows.
    pub fn snapshot(&self, current_time: Option<i64>) -> TelemetrySnapshot {
        let now = current_time.unwrap_or_else(|| self.clock.now_millis());

        let recorders: Vec<Arc<EventRecorder>> = self.recorders.read().values().cloned().collect();
        let counters: Vec<Arc<Counter>> = self.counters.read().values().cloned().collect();

        let mut snapshot = TelemetrySnapshot {
            taken_at: now,
            recorders: recorders
                .iter()
                .map(|recorder| recorder.window_snapshot(Some(now)))
                .collect(),
            counters: counters
                .iter()
                .map(|counter| counter.window_snapshot(Some(now)))
                .collect(),
        };
        snapshot.recorders.sort_by(|a, b| a.name.cmp(&b.name));
        snapshot.counters.sort_by(|a, b| a.name.cmp(&b.name));

        snapshot
    }
}
