use crate::error::ConfigError;

/// Serializes tests that mutate process-wide environment variables.
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Read an env var, treating an empty value the same as an unset one.
pub(crate) fn optional_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(val) if val.is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::ParseError(format!(
            "failed to read {key}: {e}"
        ))),
    }
}

pub(crate) fn parse_optional_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    optional_env(key)?
        .map(|s| {
            s.parse().map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{e}"),
            })
        })
        .transpose()
        .map(|opt| opt.unwrap_or(default))
}

/// Parse a boolean flag. Accepts true/false, 1/0, yes/no, on/off.
pub(crate) fn parse_bool_env(key: &str, default: bool) -> Result<bool, ConfigError> {
    match optional_env(key)? {
        None => Ok(default),
        Some(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            other => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("expected a boolean, got '{other}'"),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_env_returns_none_for_missing_var() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        // SAFETY: Under ENV_MUTEX.
        unsafe { std::env::remove_var("_PSY_CFG_MISSING_42") };
        let result = optional_env("_PSY_CFG_MISSING_42").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn optional_env_returns_none_for_empty_string() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        unsafe { std::env::set_var("_PSY_CFG_EMPTY_42", "") };
        let result = optional_env("_PSY_CFG_EMPTY_42").unwrap();
        assert!(result.is_none());
        unsafe { std::env::remove_var("_PSY_CFG_EMPTY_42") };
    }

    #[test]
    fn parse_optional_env_parses_value() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        unsafe { std::env::set_var("_PSY_CFG_PARSE_VAL_42", "42") };
        let result: u64 = parse_optional_env("_PSY_CFG_PARSE_VAL_42", 0).unwrap();
        assert_eq!(result, 42);
        unsafe { std::env::remove_var("_PSY_CFG_PARSE_VAL_42") };
    }

    #[test]
    fn parse_optional_env_returns_error_for_invalid_value() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        unsafe { std::env::set_var("_PSY_CFG_PARSE_BAD_42", "not_a_number") };
        let result: Result<u64, _> = parse_optional_env("_PSY_CFG_PARSE_BAD_42", 0);
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        unsafe { std::env::remove_var("_PSY_CFG_PARSE_BAD_42") };
    }

    #[test]
    fn parse_bool_env_accepts_common_spellings() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        for (raw, expected) in [("true", true), ("ON", true), ("0", false), ("no", false)] {
            unsafe { std::env::set_var("_PSY_CFG_BOOL_42", raw) };
            assert_eq!(parse_bool_env("_PSY_CFG_BOOL_42", !expected).unwrap(), expected);
        }
        unsafe { std::env::set_var("_PSY_CFG_BOOL_42", "maybe") };
        assert!(parse_bool_env("_PSY_CFG_BOOL_42", false).is_err());
        unsafe { std::env::remove_var("_PSY_CFG_BOOL_42") };
        assert!(parse_bool_env("_PSY_CFG_BOOL_42", true).unwrap());
    }
}
