//! Applies a validation report's corrections to an insight.

use super::{ConsistencyReport, InsightPatch};
use crate::insight::Insight;

impl InsightPatch {
    /// Overwrite every field this patch sets.
    pub fn apply_to(&self, insight: &mut Insight) {
        if let Some(detailed) = &self.detailed_weaknesses {
            insight.detailed_weaknesses = detailed.clone();
        }
        if let Some(weaknesses) = &self.weaknesses {
            insight.weaknesses = weaknesses.clone();
        }
        if let Some(raw) = &self.raw {
            insight.raw = raw.clone();
        }
    }
}

/// Corrected copy of `insight`. Consistent insights come back unchanged.
pub fn apply_corrections(insight: &Insight, report: &ConsistencyReport) -> Insight {
    let mut corrected = insight.clone();
    if !report.is_consistent {
        report.corrections.apply_to(&mut corrected);
    }
    corrected
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::classifier::MatchResult;
    use crate::consistency::{CheckField, ConsistencyValidator, Severity};
    use crate::insight::{self, WeaknessEntry};
    use crate::normalize::normalize;
    use crate::profile::{AnalysisInput, HexacoScores};

    fn generated(input: &AnalysisInput) -> (Insight, crate::profile::NormalizedVector) {
        let v = normalize(input);
        let insight = insight::generate(
            &v,
            &MatchResult {
                name: "Test Archetype".to_string(),
                description: String::new(),
                confidence: 72.0,
                fallback: false,
            },
        );
        (insight, v)
    }

    #[test]
    fn test_consistent_insight_is_returned_unchanged() {
        let (insight, _) = generated(&AnalysisInput::default());
        let report = ConsistencyReport {
            is_consistent: true,
            checks: Vec::new(),
            corrections: InsightPatch {
                raw: Some("ignored".to_string()),
                ..InsightPatch::default()
            },
        };
        assert_eq!(apply_corrections(&insight, &report), insight);
    }

    #[test]
    fn test_patch_overwrites_only_set_fields() {
        let (insight, _) = generated(&AnalysisInput::default());
        let patch = InsightPatch {
            raw: Some("patched".to_string()),
            ..InsightPatch::default()
        };
        let mut patched = insight.clone();
        patch.apply_to(&mut patched);
        assert_eq!(patched.raw, "patched");
        assert_eq!(patched.detailed_weaknesses, insight.detailed_weaknesses);
        assert_eq!(patched.strengths, insight.strengths);
    }

    #[test]
    fn test_correction_removes_invalid_weakness_and_is_idempotent() {
        let (mut insight, v) = generated(&AnalysisInput {
            hexaco: HexacoScores {
                conscientiousness: 80.0,
                ..HexacoScores::default()
            },
            ..AnalysisInput::default()
        });
        insight.detailed_weaknesses.push(WeaknessEntry {
            title: "Execution Entropy".to_string(),
            description: "injected".to_string(),
            impact: "injected".to_string(),
        });
        insight.weaknesses = insight::flatten_weaknesses(&insight.detailed_weaknesses);

        let validator = ConsistencyValidator::new();
        let report = validator.validate(&insight, &v);
        let corrected = apply_corrections(&insight, &report);

        assert!(
            !corrected
                .detailed_weaknesses
                .iter()
                .any(|w| w.title == "Execution Entropy")
        );
        assert_eq!(corrected.weaknesses.len(), corrected.detailed_weaknesses.len());
        assert!(!corrected.raw.contains("Execution Entropy"));

        let second = validator.validate(&corrected, &v);
        assert!(
            !second
                .failures()
                .any(|c| c.field == CheckField::DetailedWeaknesses && c.severity == Severity::Error)
        );
        assert!(second.corrections.is_empty());
    }
}
