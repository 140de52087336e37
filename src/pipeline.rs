//! End-to-end analysis: normalize, classify, generate, validate, correct.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::classifier::{self, MatchResult};
use crate::config::ClassifierConfig;
use crate::consistency::{ConsistencyReport, ConsistencyValidator, apply_corrections};
use crate::error::Result;
use crate::insight::{self, Insight};
use crate::normalize::normalize;
use crate::observability::{NoopObserver, Observer, ObserverEvent, ObserverMetric};
use crate::profile::{AnalysisInput, NormalizedVector};

/// Everything one analysis run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub archetype: MatchResult,
    /// Final insight, corrected unless correction was disabled.
    pub insight: Insight,
    /// Report for the insight as generated, before correction.
    pub report: ConsistencyReport,
    pub corrected: bool,
}

/// Runs the analysis pipeline.
///
/// Lexicon matchers are built once in [`InsightEngine::new`]; the engine is
/// `Send + Sync` and can be shared across threads.
pub struct InsightEngine {
    config: ClassifierConfig,
    validator: ConsistencyValidator,
    observer: Arc<dyn Observer>,
    correct: bool,
}

impl InsightEngine {
    /// Build an engine without checking `config`. Out-of-range fallback
    /// bounds are clamped at draw time; use [`InsightEngine::try_new`] to
    /// reject them instead.
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            validator: ConsistencyValidator::new(),
            observer: Arc::new(NoopObserver),
            correct: true,
        }
    }

    /// Build an engine after validating `config`.
    pub fn try_new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn with_observer(mut self, observer: Arc<dyn Observer>) -> Self {
        self.observer = observer;
        self
    }

    /// Skip the correction step and return the insight as generated.
    pub fn without_correction(mut self) -> Self {
        self.correct = false;
        self
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn validator(&self) -> &ConsistencyValidator {
        &self.validator
    }

    /// Analyze with the configured seed, or the thread-local RNG when no
    /// seed is set.
    pub fn analyze(&self, input: &AnalysisInput) -> Analysis {
        match self.config.seed {
            Some(seed) => self.analyze_with_rng(input, &mut StdRng::seed_from_u64(seed)),
            None => self.analyze_with_rng(input, &mut rand::thread_rng()),
        }
    }

    /// Load a `.json` or `.toml` score profile and analyze it.
    pub fn analyze_file(&self, path: &Path) -> Result<Analysis> {
        let input = AnalysisInput::from_path(path)?;
        Ok(self.analyze(&input))
    }

    /// Analyze drawing any randomness from `rng`.
    pub fn analyze_with_rng<R: Rng + ?Sized>(&self, input: &AnalysisInput, rng: &mut R) -> Analysis {
        let started = Instant::now();
        self.observer.record_event(&ObserverEvent::AnalysisStart {
            seeded: self.config.seed.is_some(),
        });

        let vector = normalize(input);
        let archetype = classifier::classify_archetype(&vector, &self.config, rng);
        self.observer.record_event(&ObserverEvent::ArchetypeMatched {
            archetype: archetype.name.clone(),
            confidence: archetype.confidence,
            fallback: archetype.fallback,
        });

        let generated = insight::generate(&vector, &archetype);
        let (insight, report, corrected) = self.validate_and_correct(generated, &vector);

        let duration = started.elapsed();
        self.observer.record_metric(&ObserverMetric::AnalysisLatency(duration));
        self.observer.record_event(&ObserverEvent::AnalysisEnd {
            duration,
            consistent: report.is_consistent,
            checks: report.checks.len(),
        });
        tracing::info!(
            archetype = %archetype.name,
            consistent = report.is_consistent,
            corrected,
            "pipeline: analysis complete"
        );

        Analysis {
            archetype,
            insight,
            report,
            corrected,
        }
    }

    /// Validate an existing insight against the scores it claims to describe.
    pub fn validate(&self, insight: &Insight, input: &AnalysisInput) -> ConsistencyReport {
        self.validator.validate(insight, &normalize(input))
    }

    fn validate_and_correct(
        &self,
        generated: Insight,
        vector: &NormalizedVector,
    ) -> (Insight, ConsistencyReport, bool) {
        let report = self.validator.validate(&generated, vector);

        let failed = report.failures().count();
        self.observer
            .record_metric(&ObserverMetric::ChecksFailed(failed as u64));
        for check in report.failures() {
            self.observer.record_event(&ObserverEvent::CheckFailed {
                field: check.field.to_string(),
                severity: check.severity.to_string(),
                expected: check.expected.clone(),
                actual: check.actual.clone(),
            });
        }

        if !self.correct || report.corrections.is_empty() {
            return (generated, report, false);
        }

        let corrected = apply_corrections(&generated, &report);
        let removed = generated
            .detailed_weaknesses
            .iter()
            .filter(|w| !corrected.detailed_weaknesses.contains(w))
            .count();
        self.observer.record_event(&ObserverEvent::CorrectionApplied {
            removed_weaknesses: removed,
        });
        (corrected, report, true)
    }
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}
