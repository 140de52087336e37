//! Core observer trait and event/metric types.

use std::time::Duration;

/// Receiver for pipeline lifecycle events and metrics.
///
/// The engine records events at each stage boundary and the observer
/// decides what to do with them. Shared behind `Arc<dyn Observer>`.
pub trait Observer: Send + Sync {
    /// Record a discrete lifecycle event.
    fn record_event(&self, event: &ObserverEvent);

    /// Record a numeric metric sample.
    fn record_metric(&self, metric: &ObserverMetric);

    /// Flush any buffered data. No-op by default.
    fn flush(&self) {}

    /// Human-readable backend name (e.g. "noop", "log").
    fn name(&self) -> &str;
}

/// Discrete lifecycle events the pipeline can emit.
#[derive(Debug, Clone, PartialEq)]
pub enum ObserverEvent {
    /// An analysis run started.
    AnalysisStart {
        /// Whether the run uses a fixed seed.
        seeded: bool,
    },

    /// The classifier picked an archetype.
    ArchetypeMatched {
        archetype: String,
        confidence: f64,
        /// True when the generalist fallback was used.
        fallback: bool,
    },

    /// A consistency check did not pass.
    CheckFailed {
        field: String,
        severity: String,
        expected: String,
        actual: String,
    },

    /// Corrections were applied to the generated insight.
    CorrectionApplied {
        /// Detailed weaknesses dropped by the correction.
        removed_weaknesses: usize,
    },

    /// The analysis run finished.
    AnalysisEnd {
        duration: Duration,
        consistent: bool,
        checks: usize,
    },
}

/// Numeric metric samples.
#[derive(Debug, Clone, PartialEq)]
pub enum ObserverMetric {
    /// Wall time of one analysis run.
    AnalysisLatency(Duration),
    /// Failed checks in one validation pass.
    ChecksFailed(u64),
}
