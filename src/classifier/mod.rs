//! Nearest-prototype matching over normalized trait vectors.
//!
//! Distance is a partial, weighted Euclidean metric: only the dimensions a
//! prototype lists contribute, each scaled by its weight, and the result is
//! averaged over the total weight so prototypes with different numbers of
//! targets stay comparable.
//!
//! The same metric backs two consumers:
//!
//! - [`classify_archetype`] picks the closest archetype, falling back to a
//!   generalist result when nothing matches well.
//! - [`rank_careers`] orders the career prototypes by distance.

pub mod prototypes;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use self::prototypes::{ARCHETYPES, CAREERS, Prototype, Target};
use crate::config::ClassifierConfig;
use crate::profile::NormalizedVector;

/// Name used when no archetype reaches the confidence floor.
pub const GENERALIST_NAME: &str = "Adaptive Generalist";

/// Description paired with [`GENERALIST_NAME`].
pub const GENERALIST_DESCRIPTION: &str = "Balanced profile without a single dominant axis; \
    shifts approach to match the situation instead of relying on one signature strength.";

/// Number of career names joined into the career field.
pub const CAREER_COUNT: usize = 3;

/// Outcome of a classification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    pub description: String,
    /// Heuristic 0-100 fit, not a probability.
    pub confidence: f64,
    /// True when the generalist fallback replaced a weak match.
    #[serde(default)]
    pub fallback: bool,
}

/// A prototype together with its distance from the vector being ranked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPrototype<'a> {
    pub prototype: &'a Prototype,
    pub distance: f64,
}

/// Weighted average distance between a vector and a prototype.
///
/// A prototype without targets (or with all-zero weights) sits at distance 0
/// from every vector.
pub fn average_distance(prototype: &Prototype, vector: &NormalizedVector) -> f64 {
    let (sum, total_weight) = prototype
        .targets
        .iter()
        .fold((0.0, 0.0), |(sum, total), target| {
            let diff = target.value - vector.get(target.dimension);
            (sum + target.weight * diff * diff, total + target.weight)
        });
    let total_weight = if total_weight > 0.0 { total_weight } else { 1.0 };
    (sum / total_weight).sqrt()
}

/// Linear map from distance to a 0-100 confidence.
pub fn confidence_from_distance(distance: f64) -> f64 {
    (100.0 - distance * 100.0).max(0.0)
}

/// Confidence of a single prototype for a vector.
pub fn confidence_for(prototype: &Prototype, vector: &NormalizedVector) -> f64 {
    confidence_from_distance(average_distance(prototype, vector))
}

/// Every prototype ordered by ascending distance. Ties keep table order.
pub fn rank<'a>(prototypes: &'a [Prototype], vector: &NormalizedVector) -> Vec<RankedPrototype<'a>> {
    let mut ranked: Vec<RankedPrototype<'a>> = prototypes
        .iter()
        .map(|prototype| RankedPrototype {
            prototype,
            distance: average_distance(prototype, vector),
        })
        .collect();
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}

/// The closest prototype, or `None` for an empty table.
pub fn nearest<'a>(prototypes: &'a [Prototype], vector: &NormalizedVector) -> Option<RankedPrototype<'a>> {
    prototypes
        .iter()
        .map(|prototype| RankedPrototype {
            prototype,
            distance: average_distance(prototype, vector),
        })
        .fold(None, |best: Option<RankedPrototype<'a>>, candidate| match best {
            Some(b) if b.distance <= candidate.distance => Some(b),
            _ => Some(candidate),
        })
}

/// Match a vector against the archetype table.
///
/// When the winning confidence is below `config.min_confidence` the result
/// is replaced by the generalist archetype, with a confidence drawn from
/// `config.fallback_range()` using the supplied random source.
pub fn classify_archetype<R: Rng + ?Sized>(
    vector: &NormalizedVector,
    config: &ClassifierConfig,
    rng: &mut R,
) -> MatchResult {
    classify_against(&ARCHETYPES, vector, config, rng)
}

/// [`classify_archetype`] over an arbitrary prototype table.
pub fn classify_against<R: Rng + ?Sized>(
    prototypes: &[Prototype],
    vector: &NormalizedVector,
    config: &ClassifierConfig,
    rng: &mut R,
) -> MatchResult {
    if let Some(best) = nearest(prototypes, vector) {
        let confidence = confidence_from_distance(best.distance);
        if confidence >= config.min_confidence {
            tracing::debug!(
                archetype = best.prototype.name,
                confidence,
                "classifier: archetype matched"
            );
            return MatchResult {
                name: best.prototype.name.to_string(),
                description: best.prototype.description.to_string(),
                confidence,
                fallback: false,
            };
        }
        tracing::debug!(
            closest = best.prototype.name,
            confidence,
            floor = config.min_confidence,
            "classifier: no archetype above floor, using generalist"
        );
    }

    let confidence = f64::from(rng.gen_range(config.fallback_range()));
    MatchResult {
        name: GENERALIST_NAME.to_string(),
        description: GENERALIST_DESCRIPTION.to_string(),
        confidence,
        fallback: true,
    }
}

/// Career prototypes ordered from best to worst fit.
pub fn rank_careers(vector: &NormalizedVector) -> Vec<RankedPrototype<'static>> {
    rank(&CAREERS, vector)
}

/// Top career names joined into a single ranked string.
pub fn career_text(vector: &NormalizedVector) -> String {
    rank_careers(vector)
        .iter()
        .take(CAREER_COUNT)
        .map(|r| r.prototype.name)
        .collect::<Vec<_>>()
        .join(" / ")
}
