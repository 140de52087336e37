use crate::config::helpers::{optional_env, parse_bool_env};
use crate::error::ConfigError;

/// Which observer backend receives pipeline events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObserverBackend {
    /// Emit structured events via `tracing`.
    #[default]
    Log,
    /// Discard everything.
    None,
}

impl std::str::FromStr for ObserverBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "none" | "noop" => Ok(Self::None),
            other => Err(format!("must be 'log' or 'none', got '{other}'")),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` wins when set.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
    pub observer: ObserverBackend,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
            observer: ObserverBackend::default(),
        }
    }
}

impl LoggingConfig {
    pub(crate) fn resolve() -> Result<Self, ConfigError> {
        let observer = match optional_env("PSYINSIGHT_OBSERVER")? {
            Some(s) => s
                .parse()
                .map_err(|message| ConfigError::InvalidValue {
                    key: "PSYINSIGHT_OBSERVER".to_string(),
                    message,
                })?,
            None => ObserverBackend::default(),
        };

        Ok(Self {
            filter: optional_env("PSYINSIGHT_LOG")?.unwrap_or_else(|| "info".to_string()),
            json: parse_bool_env("PSYINSIGHT_LOG_JSON", false)?,
            observer,
        })
    }
}
