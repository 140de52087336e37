//! Elo-style rating updates after a completed assessment.
//!
//! A respondent's performance score is treated as the outcome of a match
//! against a reference rating. The K-factor shrinks as the player settles:
//! large during placement, smaller once established, smallest at the top.

use serde::{Deserialize, Serialize};

use crate::config::RatingConfig;

/// Result of applying one performance to a rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingUpdate {
    pub previous: i32,
    pub rating: i32,
    pub delta: i32,
    /// Expected score against the reference, in [0, 1].
    pub expected: f64,
    pub k_factor: f64,
}

/// Probability-like expected score of `current` against `reference`.
pub fn expected_score(current: i32, reference: i32) -> f64 {
    let diff = f64::from(reference) - f64::from(current);
    1.0 / (1.0 + 10f64.powf(diff / 400.0))
}

/// K-factor for a player. Placement takes precedence over the ceiling tier.
pub fn k_factor(current: i32, matches_played: u32, config: &RatingConfig) -> f64 {
    if matches_played < config.placement_matches {
        config.k_placement
    } else if f64::from(current) >= config.ceiling {
        config.k_elite
    } else {
        config.k_standard
    }
}

/// Apply a 0-100 performance score. Out-of-range scores are clamped and NaN
/// counts as zero.
pub fn update_rating(
    current: i32,
    performance: f64,
    matches_played: u32,
    reference: i32,
    config: &RatingConfig,
) -> RatingUpdate {
    let performance = if performance.is_nan() {
        0.0
    } else {
        performance.clamp(0.0, 100.0)
    };
    let actual = performance / 100.0;
    let expected = expected_score(current, reference);
    let k = k_factor(current, matches_played, config);
    let rating = (f64::from(current) + k * (actual - expected)).round() as i32;

    tracing::debug!(current, rating, k, expected, "rating: updated");

    RatingUpdate {
        previous: current,
        rating,
        delta: rating.saturating_sub(current),
        expected,
        k_factor: k,
    }
}
