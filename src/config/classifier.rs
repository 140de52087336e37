use std::ops::RangeInclusive;

use crate::config::helpers::{optional_env, parse_optional_env};
use crate::error::ConfigError;

/// Archetype classifier settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    /// Archetype matches below this confidence are replaced by the
    /// generalist fallback.
    pub min_confidence: f64,
    /// Lower bound (inclusive) of the generalist confidence draw.
    pub fallback_min: u32,
    /// Upper bound (inclusive) of the generalist confidence draw.
    pub fallback_max: u32,
    /// Seed for the fallback draw. `None` uses the thread-local RNG.
    pub seed: Option<u64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_confidence: 60.0,
            fallback_min: 85,
            fallback_max: 95,
            seed: None,
        }
    }
}

impl ClassifierConfig {
    /// Inclusive range the generalist confidence is drawn from. Bounds are
    /// capped at 100 and an inverted pair collapses to the upper bound, so the
    /// range is never empty.
    pub fn fallback_range(&self) -> RangeInclusive<u32> {
        let max = self.fallback_max.min(100);
        let min = self.fallback_min.min(max);
        min..=max
    }

    pub(crate) fn resolve() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let min_confidence =
            parse_optional_env("PSYINSIGHT_MIN_CONFIDENCE", defaults.min_confidence)?;
        let fallback_min = parse_optional_env("PSYINSIGHT_FALLBACK_MIN", defaults.fallback_min)?;
        let fallback_max = parse_optional_env("PSYINSIGHT_FALLBACK_MAX", defaults.fallback_max)?;
        let seed = optional_env("PSYINSIGHT_SEED")?
            .map(|s| {
                s.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                    key: "PSYINSIGHT_SEED".to_string(),
                    message: format!("{e}"),
                })
            })
            .transpose()?;

        let config = Self {
            min_confidence,
            fallback_min,
            fallback_max,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the bounds `resolve` enforces. Configs built by hand should be
    /// passed through here (or [`crate::pipeline::InsightEngine::try_new`]).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_confidence.is_finite() || !(0.0..=100.0).contains(&self.min_confidence) {
            return Err(ConfigError::InvalidValue {
                key: "PSYINSIGHT_MIN_CONFIDENCE".to_string(),
                message: "must be a finite value between 0 and 100".to_string(),
            });
        }
        if self.fallback_max > 100 {
            return Err(ConfigError::InvalidValue {
                key: "PSYINSIGHT_FALLBACK_MAX".to_string(),
                message: "must not exceed 100".to_string(),
            });
        }
        if self.fallback_min > self.fallback_max {
            return Err(ConfigError::InvalidValue {
                key: "PSYINSIGHT_FALLBACK_MIN/PSYINSIGHT_FALLBACK_MAX".to_string(),
                message: format!(
                    "fallback range is empty ({} > {})",
                    self.fallback_min, self.fallback_max
                ),
            });
        }
        Ok(())
    }
}
