//! End-to-end checks of the documented window semantics

#[cfg(test)]
mod tests {
    use window_telemetry::{
        Counter, CounterEntry, EventRecorder, MAX_RETENTION_MILLIS, TelemetryError,
    };

    // ==================== EventRecorder ====================

    #[test]
    fn test_recorder_evicts_oldest_after_retention() {
        let recorder = EventRecorder::new("events", 2).unwrap();
        recorder.record(Some(0));
        recorder.record(Some(1));
        assert_eq!(recorder.snapshot(), vec![0, 1]);

        assert_eq!(recorder.record(Some(3)), Some(0));
        assert_eq!(recorder.snapshot(), vec![1, 3]);
    }

    #[test]
    fn test_recorder_stale_entries_linger_until_next_record() {
        let recorder = EventRecorder::new("events", 10).unwrap();
        for t in 0..3 {
            recorder.record(Some(t));
        }

        // queries never evict
        assert_eq!(recorder.get_count(Some(1_000), None).unwrap(), 0);
        assert_eq!(recorder.len(), 3);

        recorder.record(Some(1_000));
        assert_eq!(recorder.snapshot(), vec![1, 2, 1_000]);
    }

    #[test]
    fn test_recorder_accepts_retention_above_counter_max() {
        assert!(EventRecorder::new("events", MAX_RETENTION_MILLIS + 1).is_ok());
        assert!(Counter::new("requests", MAX_RETENTION_MILLIS + 1).is_err());
    }

    // ==================== Counter ====================

    #[test]
    fn test_counter_aggregates_same_millisecond() {
        let counter = Counter::new("requests", 1).unwrap();
        for count in 1..=5 {
            counter.inc(Some(0));
            assert_eq!(counter.snapshot(), vec![CounterEntry::new(0, count)]);
        }
    }

    #[test]
    fn test_counter_evicts_oldest_at_retention() {
        let counter = Counter::new("requests", 2).unwrap();
        counter.inc(Some(0));
        counter.inc(Some(1));

        assert_eq!(counter.inc(Some(3)), Some(CounterEntry::new(0, 1)));
        assert_eq!(
            counter.snapshot(),
            vec![CounterEntry::new(1, 1), CounterEntry::new(3, 1)]
        );
    }

    // ==================== Boundary asymmetry ====================

    #[test]
    fn test_boundary_inclusion_differs_between_primitives() {
        let recorder = EventRecorder::new("events", 100).unwrap();
        let counter = Counter::new("requests", 100).unwrap();

        recorder.record(Some(0));
        counter.inc(Some(0));

        // exactly one retention old: counted by the recorder, not by the counter
        assert_eq!(recorder.get_count(Some(100), None).unwrap(), 1);
        assert_eq!(counter.total(Some(100), None).unwrap(), 0);

        // and evicted by the counter, kept by the recorder
        assert_eq!(recorder.record(Some(100)), None);
        assert_eq!(counter.inc(Some(100)), Some(CounterEntry::new(0, 1)));
    }

    // ==================== Errors ====================

    #[test]
    fn test_negative_retention_rejected() {
        assert!(matches!(
            EventRecorder::new("events", -1),
            Err(TelemetryError::InvalidArgument(_))
        ));
        assert!(matches!(
            Counter::new("requests", -1),
            Err(TelemetryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_instance_usable_after_rejected_query() {
        let counter = Counter::new("requests", 1_000).unwrap();
        counter.inc(Some(0));

        assert!(counter.total(Some(0), Some(-1)).is_err());
        counter.inc(Some(1));
        assert_eq!(counter.total(Some(1), None).unwrap(), 2);

        let recorder = EventRecorder::new("events", 1_000).unwrap();
        recorder.record(Some(0));
        assert!(recorder.get_count(Some(0), Some(-1)).is_err());
        recorder.record(Some(1));
        assert_eq!(recorder.get_count(Some(1), None).unwrap(), 2);
    }
}
