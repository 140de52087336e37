use crate::config::helpers::parse_optional_env;
use crate::error::ConfigError;

/// K-factor tiers for rating updates.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingConfig {
    /// Matches below this count use the placement K-factor.
    pub placement_matches: u32,
    pub k_placement: f64,
    pub k_standard: f64,
    /// K-factor once the rating reaches `ceiling`.
    pub k_elite: f64,
    pub ceiling: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            placement_matches: 10,
            k_placement: 40.0,
            k_standard: 24.0,
            k_elite: 16.0,
            ceiling: 2400.0,
        }
    }
}

impl RatingConfig {
    pub(crate) fn resolve() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            placement_matches: parse_optional_env(
                "RATING_PLACEMENT_MATCHES",
                defaults.placement_matches,
            )?,
            k_placement: parse_optional_env("RATING_K_PLACEMENT", defaults.k_placement)?,
            k_standard: parse_optional_env("RATING_K_STANDARD", defaults.k_standard)?,
            k_elite: parse_optional_env("RATING_K_ELITE", defaults.k_elite)?,
            ceiling: parse_optional_env("RATING_CEILING", defaults.ceiling)?,
        };

        for (key, value) in [
            ("RATING_K_PLACEMENT", config.k_placement),
            ("RATING_K_STANDARD", config.k_standard),
            ("RATING_K_ELITE", config.k_elite),
            ("RATING_CEILING", config.ceiling),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }

        Ok(config)
    }
}
