//! Test-only observer that captures all events into a shared vector.

use std::sync::{Arc, Mutex};

use crate::observability::traits::{Observer, ObserverEvent, ObserverMetric};

/// Observer that records all events for test assertions.
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<ObserverEvent>>>,
    metrics: Arc<Mutex<Vec<ObserverMetric>>>,
}

impl RecordingObserver {
    /// Create a new recording observer and return handles to the captured data.
    #[allow(clippy::type_complexity)]
    pub fn new() -> (
        Self,
        Arc<Mutex<Vec<ObserverEvent>>>,
        Arc<Mutex<Vec<ObserverMetric>>>,
    ) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let metrics = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: Arc::clone(&events),
                metrics: Arc::clone(&metrics),
            },
            events,
            metrics,
        )
    }
}

impl Observer for RecordingObserver {
    fn record_event(&self, event: &ObserverEvent) {
        self.events.lock().unwrap().push(event.clone());
    }

    fn record_metric(&self, metric: &ObserverMetric) {
        self.metrics.lock().unwrap().push(metric.clone());
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn captures_events_and_metrics() {
        let (obs, events, metrics) = RecordingObserver::new();

        obs.record_event(&ObserverEvent::AnalysisStart { seeded: false });
        obs.record_event(&ObserverEvent::CorrectionApplied { removed_weaknesses: 2 });
        obs.record_metric(&ObserverMetric::AnalysisLatency(Duration::from_micros(10)));

        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert!(matches!(captured[0], ObserverEvent::AnalysisStart { .. }));
        assert_eq!(metrics.lock().unwrap().len(), 1);
        assert_eq!(obs.name(), "recording");
    }
}
