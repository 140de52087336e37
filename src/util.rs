//! Shared utility functions used across the codebase.

use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::InputError;

/// Deserialize a document from a `.json` or `.toml` file, picking the
/// format from the extension.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let is_json = match ext.as_deref() {
        Some("json") => true,
        Some("toml") => false,
        _ => {
            return Err(InputError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(toml::from_str(&content)?)
    }
}

/// Drop repeated strings, keeping the first occurrence of each.
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::AnalysisInput;

    #[test]
    fn dedup_keeps_first_occurrence() {
        let items = vec![
            "b".to_string(),
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "a".to_string(),
        ];
        assert_eq!(dedup_preserving_order(items), vec!["b", "a", "c"]);
    }

    #[test]
    fn load_json_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("scores.json");
        std::fs::write(
            &path,
            r#"{"iq":120,"eq":95,"riskTolerance":40,"hexaco":{"honesty":60,"emotionality":45,
            "extraversion":55,"agreeableness":65,"conscientiousness":70,"openness":75}}"#,
        )
        .expect("write");

        let input: AnalysisInput = load_document(&path).expect("should load");
        assert_eq!(input.iq, 120.0);
        assert_eq!(input.hexaco.openness, 75.0);
    }

    #[test]
    fn load_toml_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("scores.TOML");
        std::fs::write(
            &path,
            r#"
iq = 105
eq = 110
riskTolerance = 30

[hexaco]
honesty = 70
emotionality = 60
extraversion = 35
agreeableness = 80
conscientiousness = 55
openness = 40
"#,
        )
        .expect("write");

        let input: AnalysisInput = load_document(&path).expect("should load");
        assert_eq!(input.eq, 110.0);
        assert_eq!(input.hexaco.agreeableness, 80.0);
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let err = load_document::<AnalysisInput>(Path::new("scores.yaml")).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedFormat { .. }));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");
        let err = load_document::<AnalysisInput>(&path).unwrap_err();
        assert!(matches!(err, InputError::Read { .. }));
    }
}
