//! Allowed-tag vocabulary loader.
//!
//! A vocabulary file must hold a top-level list of strings, written as YAML
//! or JSON. In `auto` mode the formats are tried in a fixed order and the
//! first one that both parses and has the right shape wins.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::VocabularyError;

/// Serialization format of a vocabulary file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VocabularyFormat {
    #[default]
    Yaml,
    Json,
    /// Try each concrete format in turn
    Auto,
}

/// Concrete formats tried by `Auto`, in priority order.
/// YAML first: most JSON documents are also valid YAML.
const AUTO_ORDER: [VocabularyFormat; 2] = [VocabularyFormat::Yaml, VocabularyFormat::Json];

impl VocabularyFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            VocabularyFormat::Yaml => "yaml",
            VocabularyFormat::Json => "json",
            VocabularyFormat::Auto => "auto",
        }
    }
}

impl fmt::Display for VocabularyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VocabularyFormat {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yaml" => Ok(VocabularyFormat::Yaml),
            "json" => Ok(VocabularyFormat::Json),
            "auto" => Ok(VocabularyFormat::Auto),
            other => Err(VocabularyError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A validated vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedVocabulary {
    /// Allowed tags in file order; duplicates are kept
    pub tags: Vec<String>,
    /// Format that produced `tags` (never `Auto`)
    pub format: VocabularyFormat,
}

/// Read and validate a vocabulary file.
pub fn load(path: &Path, format: VocabularyFormat) -> Result<LoadedVocabulary, VocabularyError> {
    let content = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), %format, bytes = content.len(), "loading vocabulary");
    parse(&content, format)
}

/// Validate vocabulary content already in memory.
pub fn parse(content: &str, format: VocabularyFormat) -> Result<LoadedVocabulary, VocabularyError> {
    match format {
        VocabularyFormat::Yaml => parse_yaml(content),
        VocabularyFormat::Json => parse_json(content),
        VocabularyFormat::Auto => parse_auto(content),
    }
}

fn parse_auto(content: &str) -> Result<LoadedVocabulary, VocabularyError> {
    for candidate in AUTO_ORDER {
        match parse(content, candidate) {
            Ok(vocabulary) => return Ok(vocabulary),
            Err(e) => debug!(
                format = %candidate,
                kind = e.kind(),
                "auto detection attempt failed: {}",
                e
            ),
        }
    }
    Err(VocabularyError::AutoDetectFailed)
}

fn parse_yaml(content: &str) -> Result<LoadedVocabulary, VocabularyError> {
    let format = VocabularyFormat::Yaml;
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| VocabularyError::Parse {
            format,
            message: e.to_string(),
        })?;

    let tags = match value {
        serde_yaml::Value::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                serde_yaml::Value::String(s) => Some(s),
                _ => None,
            })
            .collect::<Option<Vec<String>>>(),
        _ => None,
    };
    finish(tags, format)
}

fn parse_json(content: &str) -> Result<LoadedVocabulary, VocabularyError> {
    let format = VocabularyFormat::Json;
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| VocabularyError::Parse {
            format,
            message: e.to_string(),
        })?;

    let tags = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect::<Option<Vec<String>>>(),
        _ => None,
    };
    finish(tags, format)
}

fn finish(
    tags: Option<Vec<String>>,
    format: VocabularyFormat,
) -> Result<LoadedVocabulary, VocabularyError> {
    match tags {
        Some(tags) => Ok(LoadedVocabulary { tags, format }),
        None => Err(VocabularyError::SchemaViolation { format }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("yaml".parse::<VocabularyFormat>().unwrap(), VocabularyFormat::Yaml);
        assert_eq!("json".parse::<VocabularyFormat>().unwrap(), VocabularyFormat::Json);
        assert_eq!("auto".parse::<VocabularyFormat>().unwrap(), VocabularyFormat::Auto);

        let err = "toml".parse::<VocabularyFormat>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported valid_tags_format: 'toml'");
    }

    #[test]
    fn test_default_format_is_yaml() {
        assert_eq!(VocabularyFormat::default(), VocabularyFormat::Yaml);
    }

    #[test]
    fn test_yaml_block_list() {
        let loaded = parse("- rust\n- cli\n- rust\n", VocabularyFormat::Yaml).unwrap();
        assert_eq!(loaded.tags, tags(&["rust", "cli", "rust"]));
        assert_eq!(loaded.format, VocabularyFormat::Yaml);
    }

    #[test]
    fn test_yaml_non_string_item_rejected() {
        let err = parse("- a\n- 1\n", VocabularyFormat::Yaml).unwrap_err();
        assert!(matches!(err, VocabularyError::SchemaViolation { format: VocabularyFormat::Yaml }));
        assert_eq!(err.to_string(), "yaml content must be a top-level list of strings");
    }

    #[test]
    fn test_yaml_empty_content_rejected() {
        assert!(parse("", VocabularyFormat::Yaml).is_err());
    }

    #[test]
    fn test_yaml_syntax_error() {
        let err = parse("tags: [rust, cli\n", VocabularyFormat::Yaml).unwrap_err();
        assert!(matches!(err, VocabularyError::Parse { format: VocabularyFormat::Yaml, .. }));
    }

    #[test]
    fn test_yaml_core_schema_keeps_words_and_dates_as_strings() {
        // YAML 1.2 core schema: only true/false are booleans, no timestamp type.
        let loaded = parse("- yes\n- no\n- on\n- off\n", VocabularyFormat::Yaml).unwrap();
        assert_eq!(loaded.tags, tags(&["yes", "no", "on", "off"]));

        let loaded = parse("- 2024-01-01\n", VocabularyFormat::Yaml).unwrap();
        assert_eq!(loaded.tags, tags(&["2024-01-01"]));

        let err = parse("- true\n- rust\n", VocabularyFormat::Yaml).unwrap_err();
        assert!(matches!(err, VocabularyError::SchemaViolation { .. }));
    }

    #[test]
    fn test_json_list() {
        let loaded = parse(r#"["a", "b"]"#, VocabularyFormat::Json).unwrap();
        assert_eq!(loaded.tags, tags(&["a", "b"]));
        assert_eq!(loaded.format, VocabularyFormat::Json);
    }

    #[test]
    fn test_json_rejects_yaml_list() {
        let err = parse("- a\n- b\n", VocabularyFormat::Json).unwrap_err();
        assert!(matches!(err, VocabularyError::Parse { format: VocabularyFormat::Json, .. }));
    }

    #[test]
    fn test_mapping_is_schema_violation_in_every_format() {
        let content = r#"{"a": 1}"#;
        for format in [VocabularyFormat::Yaml, VocabularyFormat::Json] {
            let err = parse(content, format).unwrap_err();
            assert!(matches!(err, VocabularyError::SchemaViolation { .. }), "{format}: {err}");
        }
        let err = parse(content, VocabularyFormat::Auto).unwrap_err();
        assert!(matches!(err, VocabularyError::AutoDetectFailed));
    }

    #[test]
    fn test_auto_prefers_yaml() {
        let loaded = parse(r#"["a", "b"]"#, VocabularyFormat::Auto).unwrap();
        assert_eq!(loaded.tags, tags(&["a", "b"]));
        assert_eq!(loaded.format, VocabularyFormat::Yaml);
    }

    #[test]
    fn test_auto_failure_message() {
        let err = parse("[1, 2]", VocabularyFormat::Auto).unwrap_err();
        assert_eq!(
            err.to_string(),
            "auto detection failed to parse as yaml/json list of strings"
        );
    }
}
