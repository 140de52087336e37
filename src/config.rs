//! Configuration for psyinsight.
//!
//! Every setting has a default matching the documented pipeline behavior;
//! environment variables (optionally loaded from a `.env` file) override them.

mod classifier;
pub(crate) mod helpers;
mod logging;
mod rating;

pub use self::classifier::ClassifierConfig;
pub use self::logging::{LoggingConfig, ObserverBackend};
pub use self::rating::RatingConfig;

use crate::error::ConfigError;

/// Main configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub classifier: ClassifierConfig,
    pub rating: RatingConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            classifier: ClassifierConfig::resolve()?,
            rating: RatingConfig::resolve()?,
            logging: LoggingConfig::resolve()?,
        })
    }
}
