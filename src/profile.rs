//! Psychometric score types.
//!
//! An [`AnalysisInput`] is the already-aggregated score profile handed to us
//! by the test-delivery layer: two intelligence estimates, a risk-tolerance
//! estimate, and the six HEXACO personality dimensions. The normalizer turns
//! it into a [`NormalizedVector`], which is what every downstream stage reads.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

// ---------------------------------------------------------------------------
// Dimensions
// ---------------------------------------------------------------------------

/// One of the nine scored dimensions of a respondent profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Iq,
    Eq,
    RiskTolerance,
    Honesty,
    Emotionality,
    Extraversion,
    Agreeableness,
    Conscientiousness,
    Openness,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 9] = [
        Dimension::Iq,
        Dimension::Eq,
        Dimension::RiskTolerance,
        Dimension::Honesty,
        Dimension::Emotionality,
        Dimension::Extraversion,
        Dimension::Agreeableness,
        Dimension::Conscientiousness,
        Dimension::Openness,
    ];

    /// Position of this dimension in [`Dimension::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short label used in terminal output and check messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Iq => "IQ",
            Self::Eq => "EQ",
            Self::RiskTolerance => "Risk Tolerance",
            Self::Honesty => "Honesty-Humility",
            Self::Emotionality => "Emotionality",
            Self::Extraversion => "Extraversion",
            Self::Agreeableness => "Agreeableness",
            Self::Conscientiousness => "Conscientiousness",
            Self::Openness => "Openness",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iq => write!(f, "iq"),
            Self::Eq => write!(f, "eq"),
            Self::RiskTolerance => write!(f, "riskTolerance"),
            Self::Honesty => write!(f, "honesty"),
            Self::Emotionality => write!(f, "emotionality"),
            Self::Extraversion => write!(f, "extraversion"),
            Self::Agreeableness => write!(f, "agreeableness"),
            Self::Conscientiousness => write!(f, "conscientiousness"),
            Self::Openness => write!(f, "openness"),
        }
    }
}

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// HEXACO personality scores, conventionally on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexacoScores {
    pub honesty: f64,
    pub emotionality: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub conscientiousness: f64,
    pub openness: f64,
}

impl HexacoScores {
    /// All six dimensions set to the same score.
    pub fn uniform(score: f64) -> Self {
        Self {
            honesty: score,
            emotionality: score,
            extraversion: score,
            agreeableness: score,
            conscientiousness: score,
            openness: score,
        }
    }
}

impl Default for HexacoScores {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

/// Aggregated scores for one respondent.
///
/// No field may be omitted. Values outside their documented domain are
/// accepted here and clamped during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub iq: f64,
    pub eq: f64,
    pub risk_tolerance: f64,
    pub hexaco: HexacoScores,
}

impl AnalysisInput {
    /// Raw (unclamped) score for a dimension.
    pub fn raw(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Iq => self.iq,
            Dimension::Eq => self.eq,
            Dimension::RiskTolerance => self.risk_tolerance,
            Dimension::Honesty => self.hexaco.honesty,
            Dimension::Emotionality => self.hexaco.emotionality,
            Dimension::Extraversion => self.hexaco.extraversion,
            Dimension::Agreeableness => self.hexaco.agreeableness,
            Dimension::Conscientiousness => self.hexaco.conscientiousness,
            Dimension::Openness => self.hexaco.openness,
        }
    }

    /// Load a profile from a `.json` or `.toml` file.
    pub fn from_path(path: &Path) -> Result<Self, InputError> {
        crate::util::load_document(path)
    }
}

impl Default for AnalysisInput {
    fn default() -> Self {
        Self {
            iq: 100.0,
            eq: 100.0,
            risk_tolerance: 50.0,
            hexaco: HexacoScores::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Normalized vector
// ---------------------------------------------------------------------------

/// Scores rescaled onto [0, 1] with per-dimension domain bounds.
///
/// The clamped raw score is kept next to each normalized value so that
/// threshold rules in the generator and the validator compare against the
/// exact same number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedVector {
    values: [f64; 9],
    scores: [f64; 9],
}

impl NormalizedVector {
    pub(crate) fn from_parts(values: [f64; 9], scores: [f64; 9]) -> Self {
        Self { values, scores }
    }

    /// Normalized value in [0, 1].
    pub fn get(&self, dimension: Dimension) -> f64 {
        self.values[dimension.index()]
    }

    /// Raw score clamped to the dimension's domain.
    pub fn score(&self, dimension: Dimension) -> f64 {
        self.scores[dimension.index()]
    }

    /// Normalized value on a 0-100 scale.
    pub fn percent(&self, dimension: Dimension) -> f64 {
        self.get(dimension) * 100.0
    }

    /// Iterate `(dimension, normalized value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.iter().map(|d| (*d, self.get(*d)))
    }
}
