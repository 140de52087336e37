//! Rule-driven insight generation.
//!
//! Turns a normalized vector and an archetype match into the report shown
//! to the respondent. All content comes from the tables in [`rules`]; this
//! module only evaluates them in order and assembles the result.

pub mod rules;

use serde::{Deserialize, Serialize};

use crate::classifier::{self, MatchResult};
use crate::profile::{Dimension, NormalizedVector};
use crate::util::dedup_preserving_order;

use self::rules::{
    FALLBACK_STRENGTH, FEATURELESS_PROFILE, GENERIC_STEPS, INTERACTION_RULES, MAX_STRENGTHS,
    MIN_STEPS, MIN_STRENGTHS, STRENGTH_RULES, WEAKNESS_RULES,
};

/// A weakness with its stated real-world impact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaknessEntry {
    pub title: String,
    pub description: String,
    pub impact: String,
}

impl WeaknessEntry {
    /// `"Title: description"`, the flattened form used in `weaknesses`.
    pub fn summary(&self) -> String {
        format!("{}: {}", self.title, self.description)
    }
}

/// The generated report. Serialized as the `DeepInsight` wire object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub archetype: String,
    #[serde(rename = "archetypeDesc")]
    pub archetype_description: String,
    /// Archetype confidence rounded to an integer percentage.
    pub match_score: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub detailed_weaknesses: Vec<WeaknessEntry>,
    pub actionable_steps: Vec<String>,
    pub career: String,
    pub cpu_type: String,
    pub os_type: String,
    /// Terminal-style summary log.
    pub raw: String,
}

/// Build the full insight for a vector and its archetype match.
pub fn generate(vector: &NormalizedVector, archetype: &MatchResult) -> Insight {
    let detailed_weaknesses = detailed_weaknesses(vector);
    let mut insight = Insight {
        archetype: archetype.name.clone(),
        archetype_description: archetype.description.clone(),
        match_score: match_score(archetype.confidence),
        strengths: strengths(vector),
        weaknesses: flatten_weaknesses(&detailed_weaknesses),
        detailed_weaknesses,
        actionable_steps: actionable_steps(vector),
        career: classifier::career_text(vector),
        cpu_type: cpu_type(vector).to_string(),
        os_type: os_type(vector).to_string(),
        raw: String::new(),
    };
    insight.raw = render_terminal_log(&insight, vector);

    tracing::debug!(
        strengths = insight.strengths.len(),
        weaknesses = insight.detailed_weaknesses.len(),
        steps = insight.actionable_steps.len(),
        "insight: generated"
    );
    insight
}

fn match_score(confidence: f64) -> u32 {
    if confidence.is_nan() {
        return 0;
    }
    // Bounded to 0..=100 before the cast.
    confidence.round().clamp(0.0, 100.0) as u32
}

/// Absolute-threshold strengths followed by interaction descriptors,
/// deduplicated and capped. Short lists get one fallback entry.
pub fn strengths(vector: &NormalizedVector) -> Vec<String> {
    let fired: Vec<String> = STRENGTH_RULES
        .iter()
        .filter(|rule| rule.condition.holds(vector))
        .map(|rule| rule.label)
        .chain(INTERACTION_RULES.iter().filter_map(|rule| rule.lookup(vector)))
        .map(str::to_string)
        .collect();

    let mut strengths = dedup_preserving_order(fired);
    strengths.truncate(MAX_STRENGTHS);
    if strengths.len() < MIN_STRENGTHS {
        strengths.push(FALLBACK_STRENGTH.to_string());
    }
    strengths
}

/// Every weakness rule whose conditions hold, in catalog order.
pub fn detailed_weaknesses(vector: &NormalizedVector) -> Vec<WeaknessEntry> {
    let entries: Vec<WeaknessEntry> = WEAKNESS_RULES
        .iter()
        .filter(|rule| rule.applies(vector))
        .map(|rule| rule.entry())
        .collect();
    if entries.is_empty() {
        vec![FEATURELESS_PROFILE.entry()]
    } else {
        entries
    }
}

pub fn flatten_weaknesses(entries: &[WeaknessEntry]) -> Vec<String> {
    entries.iter().map(WeaknessEntry::summary).collect()
}

/// One step per firing weakness rule, padded with generic steps when fewer
/// than [`MIN_STEPS`] fire.
pub fn actionable_steps(vector: &NormalizedVector) -> Vec<String> {
    let mut steps: Vec<String> = WEAKNESS_RULES
        .iter()
        .filter(|rule| rule.applies(vector))
        .map(|rule| rule.step.to_string())
        .collect();
    if steps.len() < MIN_STEPS {
        steps.extend(GENERIC_STEPS.iter().map(|s| s.to_string()));
    }
    steps
}

pub fn cpu_type(vector: &NormalizedVector) -> &'static str {
    let iq = vector.score(Dimension::Iq);
    if iq >= 140.0 {
        "Quantum Core"
    } else if iq >= 120.0 {
        "Neural Accelerator"
    } else if iq >= 100.0 {
        "Multi-Core Processor"
    } else {
        "Efficiency Core"
    }
}

pub fn os_type(vector: &NormalizedVector) -> &'static str {
    let emotionality = vector.score(Dimension::Emotionality);
    let conscientiousness = vector.score(Dimension::Conscientiousness);
    if conscientiousness >= 60.0 && emotionality < 40.0 {
        "Hardened Kernel"
    } else if conscientiousness >= 60.0 && emotionality >= 60.0 {
        "Realtime Sensitive OS"
    } else if conscientiousness < 40.0 && emotionality >= 60.0 {
        "Volatile Beta"
    } else if conscientiousness < 40.0 {
        "Open Sandbox"
    } else {
        "Stable Release"
    }
}

/// Multi-line terminal summary of an insight.
pub fn render_terminal_log(insight: &Insight, vector: &NormalizedVector) -> String {
    let top_strength = insight.strengths.first().map(String::as_str).unwrap_or("none");
    let first_weakness = insight
        .detailed_weaknesses
        .first()
        .map(|w| w.title.as_str())
        .unwrap_or("none");
    let flagged = insight.detailed_weaknesses.len();

    let lines = [
        format!("$ psyinsight scan --profile v{}", env!("CARGO_PKG_VERSION")),
        format!("[SYS]      CPU: {} | OS: {}", insight.cpu_type, insight.os_type),
        format!(
            "[SCORES]   IQ {:.0} | EQ {:.0} | RISK {:.0}",
            vector.score(Dimension::Iq),
            vector.score(Dimension::Eq),
            vector.score(Dimension::RiskTolerance)
        ),
        format!("[MATCH]    {} ({}%)", insight.archetype, insight.match_score),
        format!("[STRENGTH] {top_strength}"),
        format!("[WEAKNESS] {first_weakness}"),
        format!("[CAREER]   {}", insight.career),
        format!(
            "[STATUS]   {flagged} weakness{} flagged",
            if flagged == 1 { "" } else { "es" }
        ),
    ];
    lines.join("\n")
}
