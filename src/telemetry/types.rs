//! Entry and snapshot types

use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Events counted at a single millisecond
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterEntry {
    /// Epoch milliseconds
    pub timestamp: i64,
    /// Always at least 1
    pub count: u64,
}

impl CounterEntry {
    pub fn new(timestamp: i64, count: u64) -> Self {
        Self { timestamp, count }
    }
}

impl From<(i64, u64)> for CounterEntry {
    fn from((timestamp, count): (i64, u64)) -> Self {
        Self { timestamp, count }
    }
}

/// Point-in-time view of an [`EventRecorder`](super::EventRecorder)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecorderSnapshot {
    pub name: String,
    pub retention_millis: i64,
    /// Events within the retention window at the snapshot time
    pub count: usize,
    pub entries: Vec<i64>,
}

/// Point-in-time view of a [`Counter`](super::Counter)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub name: String,
    pub retention_millis: i64,
    /// Sum of counts within the retention window at the snapshot time
    pub total: u64,
    pub entries: Vec<CounterEntry>,
}

/// Every window in a registry, evaluated at the same instant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// Epoch milliseconds the windows were evaluated at
    pub taken_at: i64,
    pub recorders: Vec<RecorderSnapshot>,
    pub counters: Vec<CounterSnapshot>,
}

impl TelemetrySnapshot {
    pub fn recorder(&self, name: &str) -> Option<&RecorderSnapshot> {
        self.recorders.iter().find(|r| r.name == name)
    }

    pub fn counter(&self, name: &str) -> Option<&CounterSnapshot> {
        self.counters.iter().find(|c| c.name == name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
