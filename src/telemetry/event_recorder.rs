//! Sliding window of individual event timestamps

use super::bounded::{DEFAULT_RETENTION_MILLIS, per_second, validate_retention, validate_timespan};
use super::clock::{Clock, SystemClock};
use super::types::RecorderSnapshot;
use crate::utils::error::Result;
use crate::utils::format_duration;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, trace};

/// Records one timestamp per event and counts those inside a trailing window.
///
/// Every operation holds the same lock for its whole duration, including the
/// clock read, so concurrent callers observe some serial order of calls.
#[derive(Debug)]
pub struct EventRecorder {
    name: String,
    retention_millis: i64,
    clock: Arc<dyn Clock>,
    entries: Mutex<VecDeque<i64>>,
}

impl EventRecorder {
    /// Create a recorder keeping events for `retention_millis`.
    ///
    /// Only negative retention is rejected; there is no upper bound.
    pub fn new(name: impl Into<String>, retention_millis: i64) -> Result<Self> {
        let name = name.into();
        validate_retention(&name, retention_millis, None)?;

        debug!(
            "Created event recorder '{}' with retention {}",
            name,
            format_duration(retention_millis)
        );

        Ok(Self {
            name,
            retention_millis,
            clock: Arc::new(SystemClock),
            entries: Mutex::new(VecDeque::new()),
        })
    }

    /// Create a recorder with the default 5 minute retention
    pub fn with_default_retention(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            retention_millis: DEFAULT_RETENTION_MILLIS,
            clock: Arc::new(SystemClock),
            entries: Mutex::new(VecDeque::new()),
        }
    }

    /// Replace the time source used when no explicit time is passed
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn retention_millis(&self) -> i64 {
        self.retention_millis
    }

    /// Record an event at `current_time`, or now.
    ///
    /// Only the oldest entry is looked at: if it is more than the retention
    /// older than `current_time` it is removed and returned. At most one entry
    /// is evicted per call.
    pub fn record(&self, current_time: Option<i64>) -> Option<i64> {
        let mut entries = self.entries.lock();
        let now = current_time.unwrap_or_else(|| self.clock.now_millis());

        let stale = entries
            .front()
            .is_some_and(|&head| now.saturating_sub(head) > self.retention_millis);
        let dropped = if stale { entries.pop_front() } else { None };

        entries.push_back(now);

        if let Some(timestamp) = dropped {
            trace!(recorder = %self.name, timestamp, now, "evicted event");
        }

        dropped
    }

    /// Count events with `current_time - t <= timespan_millis`.
    ///
    /// `timespan_millis` defaults to the retention window. Does not evict.
    pub fn get_count(&self, current_time: Option<i64>, timespan_millis: Option<i64>) -> Result<usize> {
        let timespan = timespan_millis.unwrap_or(self.retention_millis);
        validate_timespan(&self.name, timespan, None)?;

        let entries = self.entries.lock();
        let now = current_time.unwrap_or_else(|| self.clock.now_millis());

        Ok(count_within(&entries, now, timespan))
    }

    /// Events per second over the trailing timespan
    pub fn rate_per_second(&self, current_time: Option<i64>, timespan_millis: Option<i64>) -> Result<f64> {
        let timespan = timespan_millis.unwrap_or(self.retention_millis);
        let count = self.get_count(current_time, Some(timespan))?;
        Ok(per_second(count as u64, timespan))
    }

    /// Copy of the stored timestamps, oldest first
    pub fn snapshot(&self) -> Vec<i64> {
        self.entries.lock().iter().copied().collect()
    }

    /// Count over the retention window together with the entries, taken under one lock
    pub fn window_snapshot(&self, current_time: Option<i64>) -> RecorderSnapshot {
        let entries = self.entries.lock();
        let now = current_time.unwrap_or_else(|| self.clock.now_millis());

        RecorderSnapshot {
            name: self.name.clone(),
            retention_millis: self.retention_millis,
            count: count_within(&entries, now, self.retention_millis),
            entries: entries.iter().copied().collect(),
        }
    }

    /// Number of stored entries, stale ones included
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

fn count_within(entries: &VecDeque<i64>, now: i64, timespan: i64) -> usize {
    entries
        .iter()
        .filter(|&&timestamp| now.saturating_sub(timestamp) <= timespan)
        .count()
}
