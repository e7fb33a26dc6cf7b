//! Sliding window of per-millisecond event counts

use super::bounded::{
    DEFAULT_RETENTION_MILLIS, MAX_RETENTION_MILLIS, per_second, validate_max_retention,
    validate_retention, validate_timespan,
};
use super::clock::{Clock, SystemClock};
use super::types::{CounterEntry, CounterSnapshot};
use crate::utils::error::Result;
use crate::utils::format_duration;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, trace};

/// Counts events per millisecond and sums them over a trailing window.
///
/// Retention and query timespans are capped at `max_retention_millis`
/// (5 minutes unless built with [`Counter::with_max_retention`]).
#[derive(Debug)]
pub struct Counter {
    name: String,
    retention_millis: i64,
    max_retention_millis: i64,
    clock: Arc<dyn Clock>,
    entries: Mutex<VecDeque<CounterEntry>>,
}

impl Counter {
    /// Create a counter keeping events for `retention_millis`, at most 5 minutes
    pub fn new(name: impl Into<String>, retention_millis: i64) -> Result<Self> {
        Self::with_max_retention(name, retention_millis, MAX_RETENTION_MILLIS)
    }

    /// Create a counter with an explicit cap on retention and query timespans
    pub fn with_max_retention(
        name: impl Into<String>,
        retention_millis: i64,
        max_retention_millis: i64,
    ) -> Result<Self> {
        let name = name.into();
        validate_max_retention(&name, max_retention_millis)?;
        validate_retention(&name, retention_millis, Some(max_retention_millis))?;

        debug!(
            "Created counter '{}' with retention {} (max {})",
            name,
            format_duration(retention_millis),
            format_duration(max_retention_millis)
        );

        Ok(Self {
            name,
            retention_millis,
            max_retention_millis,
            clock: Arc::new(SystemClock),
            entries: Mutex::new(VecDeque::new()),
        })
    }

    /// Create a counter with the default 5 minute retention
    pub fn with_default_retention(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            retention_millis: DEFAULT_RETENTION_MILLIS,
            max_retention_millis: MAX_RETENTION_MILLIS,
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

    pub fn max_retention_millis(&self) -> i64 {
        self.max_retention_millis
    }

    /// Count one event at `current_time`, or now.
    ///
    /// Increments the newest entry when it has the same timestamp, otherwise
    /// appends `(current_time, 1)`. Afterwards the oldest entry is removed and
    /// returned if it is at least the retention older than `current_time`.
    /// At most one entry is evicted per call.
    pub fn inc(&self, current_time: Option<i64>) -> Option<CounterEntry> {
        let mut entries = self.entries.lock();
        let now = current_time.unwrap_or_else(|| self.clock.now_millis());

        match entries.back_mut() {
            Some(last) if last.timestamp == now => last.count += 1,
            _ => entries.push_back(CounterEntry::new(now, 1)),
        }

        let stale = entries
            .front()
            .is_some_and(|head| now.saturating_sub(head.timestamp) >= self.retention_millis);
        let dropped = if stale { entries.pop_front() } else { None };

        if let Some(entry) = dropped {
            trace!(
                counter = %self.name,
                timestamp = entry.timestamp,
                count = entry.count,
                now,
                "evicted entry"
            );
        }

        dropped
    }

    /// Sum counts with `current_time - t < timespan_millis`.
    ///
    /// `timespan_millis` defaults to the retention window and may not exceed
    /// the maximum retention. Does not evict.
    pub fn total(&self, current_time: Option<i64>, timespan_millis: Option<i64>) -> Result<u64> {
        let timespan = timespan_millis.unwrap_or(self.retention_millis);
        validate_timespan(&self.name, timespan, Some(self.max_retention_millis))?;

        let entries = self.entries.lock();
        let now = current_time.unwrap_or_else(|| self.clock.now_millis());

        Ok(sum_within(&entries, now, timespan))
    }

    /// Events per second over the trailing timespan
    pub fn rate_per_second(&self, current_time: Option<i64>, timespan_millis: Option<i64>) -> Result<f64> {
        let timespan = timespan_millis.unwrap_or(self.retention_millis);
        let total = self.total(current_time, Some(timespan))?;
        Ok(per_second(total, timespan))
    }

    /// Copy of the stored entries, oldest first
    pub fn snapshot(&self) -> Vec<CounterEntry> {
        self.entries.lock().iter().copied().collect()
    }

    /// Total over the retention window together with the entries, taken under one lock
    pub fn window_snapshot(&self, current_time: Option<i64>) -> CounterSnapshot {
        let entries = self.entries.lock();
        let now = current_time.unwrap_or_else(|| self.clock.now_millis());

        CounterSnapshot {
            name: self.name.clone(),
            retention_millis: self.retention_millis,
            total: sum_within(&entries, now, self.retention_millis),
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

fn sum_within(entries: &VecDeque<CounterEntry>, now: i64, timespan: i64) -> u64 {
    entries
        .iter()
        .filter(|entry| now.saturating_sub(entry.timestamp) < timespan)
        .map(|entry| entry.count)
        .sum()
}
