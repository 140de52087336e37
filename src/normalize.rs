//! Maps raw scores onto a common [0, 1] scale.

use crate::profile::{AnalysisInput, Dimension, NormalizedVector};

/// Documented domain of a raw score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainBounds {
    pub min: f64,
    pub max: f64,
}

impl DomainBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the domain.
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Clamp a raw value into the domain. Non-finite values resolve to the
    /// nearest bound, NaN to the midpoint.
    pub fn clamp(&self, raw: f64) -> f64 {
        if raw.is_nan() {
            return self.midpoint();
        }
        raw.clamp(self.min, self.max)
    }

    /// `(raw - min) / (max - min)`, clamped to [0, 1].
    pub fn normalize(&self, raw: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.clamp(raw) - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Domain bounds per dimension, indexed by [`Dimension::index`].
pub const DOMAIN_TABLE: [DomainBounds; 9] = [
    DomainBounds::new(70.0, 155.0), // iq
    DomainBounds::new(70.0, 130.0), // eq
    DomainBounds::new(0.0, 100.0),  // riskTolerance
    DomainBounds::new(0.0, 100.0),  // honesty
    DomainBounds::new(0.0, 100.0),  // emotionality
    DomainBounds::new(0.0, 100.0),  // extraversion
    DomainBounds::new(0.0, 100.0),  // agreeableness
    DomainBounds::new(0.0, 100.0),  // conscientiousness
    DomainBounds::new(0.0, 100.0),  // openness
];

/// Domain bounds for a single dimension.
pub fn bounds(dimension: Dimension) -> DomainBounds {
    DOMAIN_TABLE[dimension.index()]
}

/// Normalize every dimension of a score profile. Never fails: out-of-domain
/// values are clamped rather than rejected.
pub fn normalize(input: &AnalysisInput) -> NormalizedVector {
    let mut values = [0.0; 9];
    let mut scores = [0.0; 9];
    for dim in Dimension::ALL {
        let domain = bounds(dim);
        let raw = input.raw(dim);
        scores[dim.index()] = domain.clamp(raw);
        values[dim.index()] = domain.normalize(raw);
    }
    NormalizedVector::from_parts(values, scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::HexacoScores;

    #[test]
    fn test_normalize_midrange_profile() {
        let input = AnalysisInput {
            iq: 112.5,
            eq: 100.0,
            risk_tolerance: 50.0,
            hexaco: HexacoScores::uniform(50.0),
        };
        let v = normalize(&input);
        for (dim, value) in v.iter() {
            assert!((value - 0.5).abs() < 1e-9, "{dim} should be 0.5, got {value}");
        }
    }

    #[test]
    fn test_normalize_clamps_out_of_domain() {
        let input = AnalysisInput {
            iq: 200.0,
            eq: 10.0,
            risk_tolerance: -5.0,
            hexaco: HexacoScores::uniform(130.0),
        };
        let v = normalize(&input);
        assert_eq!(v.get(Dimension::Iq), 1.0);
        assert_eq!(v.get(Dimension::Eq), 0.0);
        assert_eq!(v.get(Dimension::RiskTolerance), 0.0);
        assert_eq!(v.get(Dimension::Openness), 1.0);
        // Clamped raw scores stay inside the domain.
        assert_eq!(v.score(Dimension::Iq), 155.0);
        assert_eq!(v.score(Dimension::Eq), 70.0);
        assert_eq!(v.score(Dimension::Honesty), 100.0);
    }

    #[test]
    fn test_normalize_handles_non_finite() {
        let input = AnalysisInput {
            iq: f64::INFINITY,
            eq: f64::NEG_INFINITY,
            risk_tolerance: f64::NAN,
            hexaco: HexacoScores::default(),
        };
        let v = normalize(&input);
        assert_eq!(v.get(Dimension::Iq), 1.0);
        assert_eq!(v.get(Dimension::Eq), 0.0);
        assert_eq!(v.get(Dimension::RiskTolerance), 0.5);
        assert_eq!(v.score(Dimension::RiskTolerance), 50.0);
    }

    #[test]
    fn test_known_values() {
        let v = normalize(&AnalysisInput {
            iq: 140.0,
            eq: 85.0,
            risk_tolerance: 75.0,
            hexaco: HexacoScores::default(),
        });
        assert!((v.get(Dimension::Iq) - 70.0 / 85.0).abs() < 1e-12);
        assert!((v.get(Dimension::Eq) - 0.25).abs() < 1e-12);
        assert!((v.percent(Dimension::RiskTolerance) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_domain_does_not_divide_by_zero() {
        let domain = DomainBounds::new(10.0, 10.0);
        assert_eq!(domain.normalize(10.0), 0.0);
        assert_eq!(domain.normalize(99.0), 0.0);
    }
}
