//! Error types for psyinsight.
//!
//! The analysis pipeline itself never fails. These errors only surface at
//! the edges: loading configuration and reading input files.

use std::path::PathBuf;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Errors while loading score profiles, stats, or rendered insights from disk.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported input format for {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "PSYINSIGHT_MIN_CONFIDENCE".to_string(),
            message: "must be between 0 and 100".to_string(),
        };
        let msg = err.to_string();
        assert!(
            msg.contains("PSYINSIGHT_MIN_CONFIDENCE"),
            "Should mention the key: {msg}"
        );
        assert!(msg.contains("between 0 and 100"), "Should include message: {msg}");

        let err = ConfigError::ParseError("failed to read PSYINSIGHT_SEED".to_string());
        let msg = err.to_string();
        assert!(msg.contains("PSYINSIGHT_SEED"), "Should mention the key: {msg}");
    }

    #[test]
    fn input_error_display() {
        let err = InputError::UnsupportedFormat {
            path: PathBuf::from("scores.yaml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("scores.yaml"), "Should mention the path: {msg}");

        let err = InputError::Read {
            path: PathBuf::from("/nope/scores.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nope/scores.json"), "Should mention the path: {msg}");
        assert!(msg.contains("missing"), "Should mention the cause: {msg}");
    }

    #[test]
    fn top_level_error_from_conversions() {
        let config_err = ConfigError::ParseError("bad".to_string());
        let err: Error = config_err.into();
        assert!(matches!(err, Error::Config(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let input_err: InputError = json_err.into();
        let err: Error = input_err.into();
        assert!(matches!(err, Error::Input(InputError::Json(_))));
    }
}
