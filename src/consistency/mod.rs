//! Second-pass validation of generated insights against measured scores.
//!
//! Three families of checks run over an [`Insight`]:
//!
//! 1. Keyword contradiction: the archetype name and description are scanned
//!    for vocabulary asserting the opposite level of a clearly low or high
//!    dimension.
//! 2. Weakness validity: every detailed weakness whose title names a rule in
//!    the weakness catalog must satisfy that rule's conditions.
//! 3. Plausibility: selected strengths and career families require minimum
//!    scores.
//!
//! Failing checks are data, not errors. Only weakness failures produce
//! corrections; see [`corrector`].

pub mod corrector;
pub mod lexicon;

use serde::{Deserialize, Serialize};

pub use self::corrector::apply_corrections;
use self::lexicon::{Level, LexiconHit, LexiconMatcher};
use crate::insight::rules::{FEATURELESS_PROFILE, TraitCondition, WEAKNESS_RULES, all_hold};
use crate::insight::{self, Insight, WeaknessEntry};
use crate::profile::{Dimension, NormalizedVector};

/// How serious a failed check is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Insight field a check inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckField {
    Archetype,
    Strengths,
    DetailedWeaknesses,
    Career,
}

impl std::fmt::Display for CheckField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Archetype => write!(f, "archetype"),
            Self::Strengths => write!(f, "strengths"),
            Self::DetailedWeaknesses => write!(f, "detailedWeaknesses"),
            Self::Career => write!(f, "career"),
        }
    }
}

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyCheck {
    pub field: CheckField,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

/// Field overrides for an [`Insight`]. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_weaknesses: Option<Vec<WeaknessEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl InsightPatch {
    pub fn is_empty(&self) -> bool {
        self.detailed_weaknesses.is_none() && self.weaknesses.is_none() && self.raw.is_none()
    }
}

/// Aggregate result of validating one insight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyReport {
    pub is_consistent: bool,
    pub checks: Vec<ConsistencyCheck>,
    pub corrections: InsightPatch,
}

impl ConsistencyReport {
    /// Checks that did not pass.
    pub fn failures(&self) -> impl Iterator<Item = &ConsistencyCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// True if any failed check has error severity.
    pub fn has_errors(&self) -> bool {
        self.failures().any(|c| c.severity == Severity::Error)
    }

    /// Failure descriptions, errors first.
    pub fn failure_messages(&self) -> Vec<String> {
        let mut failures: Vec<&ConsistencyCheck> = self.failures().collect();
        failures.sort_by(|a, b| b.severity.cmp(&a.severity));
        failures
            .iter()
            .map(|c| format!("[{}] {}: expected {}, got {}", c.severity, c.field, c.expected, c.actual))
            .collect()
    }
}

/// A weakness-title keyword and the conditions any matching entry must meet.
#[derive(Debug, Clone)]
struct WeaknessRequirement {
    keyword: String,
    conditions: &'static [TraitCondition],
}

/// A minimum score attached to a keyword in generated text.
#[derive(Debug, Clone, Copy)]
struct PlausibilityRule {
    keywords: &'static [&'static str],
    condition: TraitCondition,
    severity: Severity,
}

const STRENGTH_REQUIREMENTS: &[PlausibilityRule] = &[
    PlausibilityRule {
        keywords: &["elite cognitive"],
        condition: TraitCondition::at_least(Dimension::Iq, 120.0),
        severity: Severity::Error,
    },
    PlausibilityRule {
        keywords: &["radical empathy"],
        condition: TraitCondition::at_least(Dimension::Eq, 115.0),
        severity: Severity::Error,
    },
];

const CAREER_REQUIREMENTS: &[PlausibilityRule] = &[
    PlausibilityRule {
        keywords: &["scientist", "engineer", "researcher", "analyst"],
        condition: TraitCondition::at_least(Dimension::Iq, 110.0),
        severity: Severity::Warning,
    },
    PlausibilityRule {
        keywords: &["therapist", "counselor", "psychologist", "diplomat"],
        condition: TraitCondition::at_least(Dimension::Eq, 100.0),
        severity: Severity::Warning,
    },
    PlausibilityRule {
        keywords: &["venture", "trader", "entrepreneur", "founder"],
        condition: TraitCondition::at_least(Dimension::RiskTolerance, 60.0),
        severity: Severity::Warning,
    },
];

/// Validates insights against the vector they were generated from.
pub struct ConsistencyValidator {
    lexicon: LexiconMatcher,
    weakness_requirements: Vec<WeaknessRequirement>,
}

impl ConsistencyValidator {
    pub fn new() -> Self {
        let weakness_requirements = WEAKNESS_RULES
            .iter()
            .map(|rule| WeaknessRequirement {
                keyword: rule.keyword(),
                conditions: rule.conditions,
            })
            .collect();
        Self {
            lexicon: LexiconMatcher::new(),
            weakness_requirements,
        }
    }

    /// Run every check and compute corrections.
    pub fn validate(&self, insight: &Insight, vector: &NormalizedVector) -> ConsistencyReport {
        let mut checks = self.check_archetype(insight, vector);
        let (weakness_checks, failed_entries) = self.check_weaknesses(insight, vector);
        checks.extend(weakness_checks);
        checks.extend(check_strengths(insight, vector));
        checks.extend(check_career(insight, vector));

        for check in checks.iter().filter(|c| !c.passed) {
            tracing::warn!(
                field = %check.field,
                severity = %check.severity,
                expected = %check.expected,
                actual = %check.actual,
                "consistency: check failed"
            );
        }

        let corrections = if failed_entries.is_empty() {
            InsightPatch::default()
        } else {
            weakness_corrections(insight, vector, &failed_entries)
        };
        let is_consistent = checks.iter().all(|c| c.passed);

        ConsistencyReport {
            is_consistent,
            checks,
            corrections,
        }
    }

    fn check_archetype(&self, insight: &Insight, vector: &NormalizedVector) -> Vec<ConsistencyCheck> {
        let text = format!("{} {}", insight.archetype, insight.archetype_description);
        let contradictions: Vec<LexiconHit> = self
            .lexicon
            .scan(&text)
            .into_iter()
            .filter(|hit| Level::measured(vector, hit.dimension) == Some(hit.level.opposite()))
            .collect();

        if contradictions.is_empty() {
            return vec![ConsistencyCheck {
                field: CheckField::Archetype,
                expected: "archetype text consistent with measured levels".to_string(),
                actual: "no contradicting keywords".to_string(),
                passed: true,
                severity: Severity::Warning,
                fix: None,
            }];
        }

        // One check per contradicted dimension, in canonical order.
        Dimension::ALL
            .iter()
            .filter_map(|dim| {
                let words: Vec<&str> = contradictions
                    .iter()
                    .filter(|hit| hit.dimension == *dim)
                    .map(|hit| hit.word)
                    .collect();
                if words.is_empty() {
                    return None;
                }
                let measured = Level::measured(vector, *dim)?;
                Some(ConsistencyCheck {
                    field: CheckField::Archetype,
                    expected: format!("{dim} {measured} ({:.0})", vector.score(*dim)),
                    actual: format!("archetype text implies {dim} {}: {}", measured.opposite(), words.join(", ")),
                    passed: false,
                    severity: Severity::Warning,
                    fix: Some(format!("Rephrase archetype text without: {}", words.join(", "))),
                })
            })
            .collect()
    }

    /// Returns the checks and the indices of entries that failed.
    fn check_weaknesses(&self, insight: &Insight, vector: &NormalizedVector) -> (Vec<ConsistencyCheck>, Vec<usize>) {
        let mut checks = Vec::new();
        let mut failed = Vec::new();

        for (index, entry) in insight.detailed_weaknesses.iter().enumerate() {
            let title = entry.title.to_lowercase();
            let mut entry_failed = false;
            for requirement in self
                .weakness_requirements
                .iter()
                .filter(|r| title.contains(&r.keyword))
            {
                let passed = all_hold(requirement.conditions, vector);
                entry_failed |= !passed;
                checks.push(ConsistencyCheck {
                    field: CheckField::DetailedWeaknesses,
                    expected: format!("{}: {}", entry.title, describe_conditions(requirement.conditions)),
                    actual: describe_scores(requirement.conditions, vector),
                    passed,
                    severity: Severity::Error,
                    fix: (!passed).then(|| format!("Remove weakness '{}'", entry.title)),
                });
            }
            if entry_failed {
                failed.push(index);
            }
        }
        (checks, failed)
    }
}

impl Default for ConsistencyValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_strengths(insight: &Insight, vector: &NormalizedVector) -> Vec<ConsistencyCheck> {
    insight
        .strengths
        .iter()
        .flat_map(|strength| plausibility_checks(CheckField::Strengths, strength, STRENGTH_REQUIREMENTS, vector))
        .collect()
}

fn check_career(insight: &Insight, vector: &NormalizedVector) -> Vec<ConsistencyCheck> {
    insight
        .career
        .split(" / ")
        .filter(|name| !name.trim().is_empty())
        .flat_map(|name| plausibility_checks(CheckField::Career, name.trim(), CAREER_REQUIREMENTS, vector))
        .collect()
}

/// One check per rule whose keywords appear in `text`.
fn plausibility_checks(
    field: CheckField,
    text: &str,
    rules: &[PlausibilityRule],
    vector: &NormalizedVector,
) -> Vec<ConsistencyCheck> {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .filter(|rule| rule.keywords.iter().any(|k| lowered.contains(k)))
        .map(|rule| {
            let passed = rule.condition.holds(vector);
            ConsistencyCheck {
                field,
                expected: format!("{text}: {}", rule.condition),
                actual: format_score(rule.condition.dimension, vector),
                passed,
                severity: rule.severity,
                fix: (!passed).then(|| format!("Drop '{text}'")),
            }
        })
        .collect()
}

fn describe_conditions(conditions: &[TraitCondition]) -> String {
    conditions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" AND ")
}

fn describe_scores(conditions: &[TraitCondition], vector: &NormalizedVector) -> String {
    conditions
        .iter()
        .map(|c| format_score(c.dimension, vector))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_score(dimension: Dimension, vector: &NormalizedVector) -> String {
    format!("{dimension} = {}", vector.score(dimension))
}

/// Filter failed weaknesses and regenerate the fields derived from them.
fn weakness_corrections(insight: &Insight, vector: &NormalizedVector, failed: &[usize]) -> InsightPatch {
    let mut kept: Vec<WeaknessEntry> = insight
        .detailed_weaknesses
        .iter()
        .enumerate()
        .filter(|(index, _)| !failed.contains(index))
        .map(|(_, entry)| entry.clone())
        .collect();
    if kept.is_empty() {
        kept.push(FEATURELESS_PROFILE.entry());
    }

    let weaknesses = insight::flatten_weaknesses(&kept);
    let mut patched = insight.clone();
    patched.detailed_weaknesses = kept.clone();
    patched.weaknesses = weaknesses.clone();
    let raw = insight::render_terminal_log(&patched, vector);

    InsightPatch {
        detailed_weaknesses: Some(kept),
        weaknesses: Some(weaknesses),
        raw: Some(raw),
    }
}
