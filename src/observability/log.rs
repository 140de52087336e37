//! Tracing-based observer that emits structured log events.
//!
//! Events appear alongside normal application logs, so the subscriber
//! configured in `main` controls their format and filtering.

use crate::observability::traits::{Observer, ObserverEvent, ObserverMetric};

/// Observer that logs events and metrics via `tracing`.
pub struct LogObserver;

impl Observer for LogObserver {
    fn record_event(&self, event: &ObserverEvent) {
        match event {
            ObserverEvent::AnalysisStart { seeded } => {
                tracing::debug!(seeded, "observer: analysis.start");
            }
            ObserverEvent::ArchetypeMatched {
                archetype,
                confidence,
                fallback,
            } => {
                tracing::info!(
                    archetype,
                    confidence,
                    fallback,
                    "observer: archetype.matched"
                );
            }
            ObserverEvent::CheckFailed {
                field,
                severity,
                expected,
                actual,
            } => {
                tracing::warn!(
                    field,
                    severity,
                    expected,
                    actual,
                    "observer: check.failed"
                );
            }
            ObserverEvent::CorrectionApplied { removed_weaknesses } => {
                tracing::info!(removed_weaknesses, "observer: correction.applied");
            }
            ObserverEvent::AnalysisEnd {
                duration,
                consistent,
                checks,
            } => {
                tracing::info!(
                    duration_us = duration.as_micros() as u64,
                    consistent,
                    checks,
                    "observer: analysis.end"
                );
            }
        }
    }

    fn record_metric(&self, metric: &ObserverMetric) {
        match metric {
            ObserverMetric::AnalysisLatency(d) => {
                tracing::debug!(
                    latency_us = d.as_micros() as u64,
                    "observer: metric.analysis_latency"
                );
            }
            ObserverMetric::ChecksFailed(n) => {
                tracing::debug!(failed = n, "observer: metric.checks_failed");
            }
        }
    }

    fn name(&self) -> &str {
        "log"
    }
}
