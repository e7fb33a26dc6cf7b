//! Registry and configuration integration tests

#[cfg(test)]
mod tests {
    use crate::common::ClockedRegistry;
    use std::sync::Arc;
    use std::thread;
    use window_telemetry::{Counter, TelemetryConfig, TelemetryError, TelemetrySnapshot};

    #[test]
    fn test_registry_from_sample_config() {
        let fixture = ClockedRegistry::from_sample(10_000);
        let registry = &fixture.registry;

        assert_eq!(registry.recorder_names(), vec!["auth_failures"]);
        assert_eq!(registry.counter_names(), vec!["errors", "requests"]);
        assert_eq!(registry.counter("errors").unwrap().retention_millis(), 500);
    }

    #[test]
    fn test_windows_follow_shared_clock() {
        let fixture = ClockedRegistry::from_sample(10_000);
        let requests = fixture.registry.counter("requests").unwrap();
        let errors = fixture.registry.counter("errors").unwrap();
        let failures = fixture.registry.recorder("auth_failures").unwrap();

        for _ in 0..3 {
            requests.inc(None);
        }
        errors.inc(None);
        failures.record(None);

        fixture.clock.advance(600);
        requests.inc(None);

        let snapshot = fixture.registry.snapshot(None);
        assert_eq!(snapshot.taken_at, 10_600);
        assert_eq!(snapshot.counter("requests").unwrap().total, 4);
        // 600ms old against a 500ms window
        assert_eq!(snapshot.counter("errors").unwrap().total, 0);
        assert_eq!(snapshot.recorder("auth_failures").unwrap().count, 1);
    }

    #[test]
    fn test_registered_handles_are_shared_across_threads() {
        let fixture = ClockedRegistry::from_sample(0);

        thread::scope(|s| {
            for _ in 0..4 {
                let registry = &fixture.registry;
                s.spawn(move || {
                    let requests = registry.counter("requests").unwrap();
                    for _ in 0..250 {
                        requests.inc(Some(5));
                    }
                });
            }
        });

        let requests = fixture.registry.counter("requests").unwrap();
        assert_eq!(requests.total(Some(5), None).unwrap(), 1_000);
    }

    #[test]
    fn test_duplicate_registration_keeps_original() {
        let fixture = ClockedRegistry::from_sample(0);
        let err = fixture
            .registry
            .register_counter(Counter::new("requests", 10).unwrap())
            .unwrap_err();

        assert!(matches!(err, TelemetryError::AlreadyRegistered(_)));
        let original = fixture.registry.counter("requests").unwrap();
        assert_eq!(original.retention_millis(), 1_000);
        assert_eq!(Arc::strong_count(&original), 2);
    }

    #[test]
    fn test_invalid_config_builds_nothing() {
        let config = TelemetryConfig::from_yaml_str("counters:\n  - name: too_long\n    retention_millis: 300001\n");
        assert!(matches!(config, Err(TelemetryError::Config(_))));
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let fixture = ClockedRegistry::from_sample(2_000);
        fixture.registry.counter("requests").unwrap().inc(None);
        fixture.registry.recorder("auth_failures").unwrap().record(None);

        let snapshot = fixture.registry.snapshot(None);
        let json = snapshot.to_json().unwrap();
        let parsed: TelemetrySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
