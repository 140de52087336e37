//! Declarative rule tables for insight generation.
//!
//! Every table is an ordered slice of `{condition, payload}` entries and is
//! evaluated in authoring order. Thresholds are expressed on the clamped raw
//! score of each dimension (see [`NormalizedVector::score`]).
//!
//! Weakness rules double as the source of truth for validation: the
//! consistency validator derives its title-keyword requirements from
//! [`WEAKNESS_RULES`], so a weakness and its check can never disagree.

use serde::{Deserialize, Serialize};

use crate::insight::WeaknessEntry;
use crate::profile::{Dimension, NormalizedVector};

// ---------------------------------------------------------------------------
// Conditions
// ---------------------------------------------------------------------------

/// Threshold comparison against a clamped raw score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op", content = "value")]
pub enum Comparison {
    Above(f64),
    AtLeast(f64),
    Below(f64),
}

/// A score requirement on one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitCondition {
    pub dimension: Dimension,
    pub comparison: Comparison,
}

impl TraitCondition {
    pub const fn above(dimension: Dimension, threshold: f64) -> Self {
        Self {
            dimension,
            comparison: Comparison::Above(threshold),
        }
    }

    pub const fn at_least(dimension: Dimension, threshold: f64) -> Self {
        Self {
            dimension,
            comparison: Comparison::AtLeast(threshold),
        }
    }

    pub const fn below(dimension: Dimension, threshold: f64) -> Self {
        Self {
            dimension,
            comparison: Comparison::Below(threshold),
        }
    }

    pub fn holds(&self, vector: &NormalizedVector) -> bool {
        let score = vector.score(self.dimension);
        match self.comparison {
            Comparison::Above(t) => score > t,
            Comparison::AtLeast(t) => score >= t,
            Comparison::Below(t) => score < t,
        }
    }
}

impl std::fmt::Display for TraitCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.comparison {
            Comparison::Above(t) => write!(f, "{} > {t}", self.dimension),
            Comparison::AtLeast(t) => write!(f, "{} >= {t}", self.dimension),
            Comparison::Below(t) => write!(f, "{} < {t}", self.dimension),
        }
    }
}

/// True when every condition holds.
pub fn all_hold(conditions: &[TraitCondition], vector: &NormalizedVector) -> bool {
    conditions.iter().all(|c| c.holds(vector))
}

// ---------------------------------------------------------------------------
// Strengths
// ---------------------------------------------------------------------------

/// Maximum number of strengths reported.
pub const MAX_STRENGTHS: usize = 5;

/// Below this many fired strength rules, [`FALLBACK_STRENGTH`] is appended.
pub const MIN_STRENGTHS: usize = 3;

pub const FALLBACK_STRENGTH: &str = "Balanced Adaptability";

pub const ELITE_COGNITIVE: &str = "Elite Cognitive Processing";
pub const RADICAL_EMPATHY: &str = "Radical Empathy";

/// Absolute-threshold strength rule.
#[derive(Debug, Clone, Copy)]
pub struct StrengthRule {
    pub condition: TraitCondition,
    pub label: &'static str,
}

pub const STRENGTH_RULES: &[StrengthRule] = &[
    StrengthRule {
        condition: TraitCondition::at_least(Dimension::Iq, 130.0),
        label: ELITE_COGNITIVE,
    },
    StrengthRule {
        condition: TraitCondition::at_least(Dimension::Eq, 118.0),
        label: RADICAL_EMPATHY,
    },
    StrengthRule {
        condition: TraitCondition::at_least(Dimension::RiskTolerance, 75.0),
        label: "Calculated Boldness",
    },
    StrengthRule {
        condition: TraitCondition::at_least(Dimension::Conscientiousness, 75.0),
        label: "Relentless Execution",
    },
    StrengthRule {
        condition: TraitCondition::at_least(Dimension::Openness, 75.0),
        label: "Conceptual Fluency",
    },
    StrengthRule {
        condition: TraitCondition::at_least(Dimension::Honesty, 75.0),
        label: "Unshakeable Integrity",
    },
    StrengthRule {
        condition: TraitCondition::below(Dimension::Emotionality, 25.0),
        label: "Stress Immunity",
    },
    StrengthRule {
        condition: TraitCondition::at_least(Dimension::Extraversion, 75.0),
        label: "Magnetic Presence",
    },
    StrengthRule {
        condition: TraitCondition::at_least(Dimension::Agreeableness, 75.0),
        label: "Collaborative Instinct",
    },
];

/// Quadrant boundaries for interaction rules, on the 0-100 scale.
pub const QUADRANT_HIGH: f64 = 60.0;
pub const QUADRANT_LOW: f64 = 40.0;

/// High/low band of a score for interaction lookups. Mid-band scores have
/// no quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    High,
    Low,
}

impl Band {
    pub fn of(score: f64) -> Option<Self> {
        if score >= QUADRANT_HIGH {
            Some(Self::High)
        } else if score < QUADRANT_LOW {
            Some(Self::Low)
        } else {
            None
        }
    }
}

/// Strength descriptor chosen by the quadrant of two dimensions.
#[derive(Debug, Clone, Copy)]
pub struct InteractionRule {
    pub first: Dimension,
    pub second: Dimension,
    pub high_high: &'static str,
    pub high_low: &'static str,
    pub low_high: &'static str,
    pub low_low: &'static str,
}

impl InteractionRule {
    pub fn lookup(&self, vector: &NormalizedVector) -> Option<&'static str> {
        let first = Band::of(vector.score(self.first))?;
        let second = Band::of(vector.score(self.second))?;
        Some(match (first, second) {
            (Band::High, Band::High) => self.high_high,
            (Band::High, Band::Low) => self.high_low,
            (Band::Low, Band::High) => self.low_high,
            (Band::Low, Band::Low) => self.low_low,
        })
    }
}

pub const INTERACTION_RULES: &[InteractionRule] = &[
    InteractionRule {
        first: Dimension::Honesty,
        second: Dimension::Agreeableness,
        high_high: "Trusted Mediator",
        high_low: "Principled Challenger",
        low_high: "Social Navigator",
        low_low: "Hard-Nosed Negotiator",
    },
    InteractionRule {
        first: Dimension::Extraversion,
        second: Dimension::Emotionality,
        high_high: "Expressive Connector",
        high_low: "Composed Frontliner",
        low_high: "Deep Observer",
        low_low: "Stoic Operator",
    },
    InteractionRule {
        first: Dimension::Conscientiousness,
        second: Dimension::Openness,
        high_high: "Disciplined Innovator",
        high_low: "Reliable Executor",
        low_high: "Free-Range Explorer",
        low_low: "Pragmatic Improviser",
    },
];

// ---------------------------------------------------------------------------
// Weaknesses and actionable steps
// ---------------------------------------------------------------------------

/// A weakness with the score conditions that justify it and the step that
/// addresses it.
#[derive(Debug, Clone, Copy)]
pub struct WeaknessRule {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub conditions: &'static [TraitCondition],
    pub step: &'static str,
}

impl WeaknessRule {
    pub fn applies(&self, vector: &NormalizedVector) -> bool {
        all_hold(self.conditions, vector)
    }

    /// Lower-cased title, used to recognise this weakness in generated text.
    pub fn keyword(&self) -> String {
        self.title.to_lowercase()
    }

    pub fn entry(&self) -> WeaknessEntry {
        WeaknessEntry {
            title: self.title.to_string(),
            description: self.description.to_string(),
            impact: self.impact.to_string(),
        }
    }
}

pub const WEAKNESS_RULES: &[WeaknessRule] = &[
    WeaknessRule {
        title: "Cognitive Dissociation",
        description: "Analytical horsepower outpaces emotional read-out: the problem gets \
            solved while the people inside it go unnoticed.",
        impact: "Technically correct decisions stall because stakeholders feel unheard.",
        conditions: &[
            TraitCondition::above(Dimension::Iq, 120.0),
            TraitCondition::below(Dimension::Eq, 90.0),
        ],
        step: "Before finalizing a decision, write down how each affected person is likely \
            to react and check one of those guesses with them.",
    },
    WeaknessRule {
        title: "Execution Entropy",
        description: "Plans start strong and dissolve as attention drifts to the next \
            interesting thing.",
        impact: "Half-finished work accumulates and deadlines slip without warning.",
        conditions: &[TraitCondition::below(Dimension::Conscientiousness, 40.0)],
        step: "Cap active commitments at three and close one before opening another.",
    },
    WeaknessRule {
        title: "Reckless Velocity",
        description: "Appetite for risk runs ahead of the follow-through needed to \
            manage it.",
        impact: "Bold bets get placed without the safeguards that would make them survivable.",
        conditions: &[
            TraitCondition::above(Dimension::RiskTolerance, 80.0),
            TraitCondition::below(Dimension::Conscientiousness, 50.0),
        ],
        step: "Write a one-paragraph downside plan before committing to any bet you \
            cannot easily reverse.",
    },
    WeaknessRule {
        title: "Analysis Paralysis",
        description: "Thorough preparation turns into a reason to never commit.",
        impact: "Windows of opportunity close while the plan is still being refined.",
        conditions: &[
            TraitCondition::below(Dimension::RiskTolerance, 25.0),
            TraitCondition::above(Dimension::Conscientiousness, 70.0),
        ],
        step: "Set a decision deadline up front and ship the best option available when \
            it arrives.",
    },
    WeaknessRule {
        title: "Emotional Flooding",
        description: "Strong feelings arrive quickly and crowd out deliberate thinking.",
        impact: "High-pressure moments produce reactions that are later regretted.",
        conditions: &[TraitCondition::above(Dimension::Emotionality, 75.0)],
        step: "Practice a fixed ten-second pause before responding in tense conversations.",
    },
    WeaknessRule {
        title: "Interpersonal Friction",
        description: "Bluntness and low patience for disagreement strain working \
            relationships.",
        impact: "Collaborators stop volunteering information or help.",
        conditions: &[TraitCondition::below(Dimension::Agreeableness, 30.0)],
        step: "In every disagreement, restate the other position in your own words before \
            answering it.",
    },
    WeaknessRule {
        title: "Social Withdrawal",
        description: "Energy is guarded so carefully that useful connections never form.",
        impact: "Good work goes unseen and opportunities route to more visible peers.",
        conditions: &[TraitCondition::below(Dimension::Extraversion, 25.0)],
        step: "Share one piece of work-in-progress with a colleague every week.",
    },
    WeaknessRule {
        title: "Ethical Flexibility",
        description: "Rules are treated as suggestions when they get in the way of a goal.",
        impact: "Short-term wins erode long-term trust and reputation.",
        conditions: &[TraitCondition::below(Dimension::Honesty, 35.0)],
        step: "Before any shortcut, ask whether you would be comfortable explaining it \
            publicly.",
    },
    WeaknessRule {
        title: "Cognitive Rigidity",
        description: "Familiar methods are defended long after the situation has changed.",
        impact: "Better approaches are dismissed before they are understood.",
        conditions: &[TraitCondition::below(Dimension::Openness, 30.0)],
        step: "Try one unfamiliar tool or method each month and note what it does better.",
    },
    WeaknessRule {
        title: "Boundary Erosion",
        description: "The urge to keep everyone comfortable overrides personal limits.",
        impact: "Workload and resentment build until burnout forces a reset.",
        conditions: &[TraitCondition::above(Dimension::Agreeableness, 80.0)],
        step: "Decline one low-value request per week and offer an alternative instead.",
    },
    WeaknessRule {
        title: "Intellectual Isolation",
        description: "Ideas are worked out alone and arrive fully formed, leaving others \
            no room to contribute.",
        impact: "Strong concepts fail to gain the allies they need to get adopted.",
        conditions: &[
            TraitCondition::above(Dimension::Iq, 130.0),
            TraitCondition::below(Dimension::Extraversion, 40.0),
        ],
        step: "Present ideas at the half-baked stage to at least one collaborator.",
    },
];

/// Emitted when no weakness rule fires.
pub const FEATURELESS_PROFILE: WeaknessRule = WeaknessRule {
    title: "Featureless Profile",
    description: "No dimension sits far enough from the middle to create a pronounced \
        blind spot.",
    impact: "Without a defining edge, it is easy to be overlooked for roles that reward a \
        signature strength.",
    conditions: &[],
    step: "",
};

/// Below this many fired steps, [`GENERIC_STEPS`] are appended.
pub const MIN_STEPS: usize = 3;

pub const GENERIC_STEPS: [&str; 2] = [
    "Pick one habit to strengthen and review progress on it at the end of each month.",
    "Ask a trusted peer for one piece of candid feedback every week.",
];
