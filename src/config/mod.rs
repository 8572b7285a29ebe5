//! Configuration: built-in defaults, override sources, and merging.

pub mod resolve;
pub mod types;

use serde::{Deserialize, Serialize};

pub use resolve::{resolve_config, resolve_config_from};
pub use types::{CommitType, default_types};

/// Key under `config` in `package.json` that holds the czmoji settings.
pub const MANIFEST_FIELD: &str = "g-cz-emoji";

pub const DEFAULT_SUBJECT_MAX_LENGTH: usize = 75;
pub const DEFAULT_SUBJECT_MIN_LENGTH: usize = 2;

/// Per-question prompt message overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionMessages {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub commit_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<String>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub types: Vec<CommitType>,
    /// Show the emoji glyph in the header instead of its shortcode.
    pub symbol: bool,
    pub skip_questions: Vec<String>,
    pub subject_max_length: usize,
    pub subject_min_length: usize,
    /// `type(scope): emoji subject` when true, `emoji (scope) subject` otherwise.
    pub conventional: bool,
    pub scopes: Option<Vec<String>>,
    pub questions: Option<QuestionMessages>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            types: default_types(),
            symbol: true,
            skip_questions: Vec::new(),
            subject_max_length: DEFAULT_SUBJECT_MAX_LENGTH,
            subject_min_length: DEFAULT_SUBJECT_MIN_LENGTH,
            conventional: true,
            scopes: None,
            questions: None,
        }
    }
}

impl Config {
    /// Shallow merge: every field present in `overrides` replaces the
    /// corresponding field of `self` wholesale.
    pub fn merge(self, overrides: ConfigOverride) -> Self {
        Self {
            types: overrides.types.unwrap_or(self.types),
            symbol: overrides.symbol.unwrap_or(self.symbol),
            skip_questions: overrides.skip_questions.unwrap_or(self.skip_questions),
            subject_max_length: overrides
                .subject_max_length
                .unwrap_or(self.subject_max_length),
            subject_min_length: overrides
                .subject_min_length
                .unwrap_or(self.subject_min_length),
            conventional: overrides.conventional.unwrap_or(self.conventional),
            scopes: overrides.scopes.or(self.scopes),
            questions: overrides.questions.or(self.questions),
        }
    }

    /// Whether the named question is listed in `skipQuestions`.
    pub fn skips(&self, question: &str) -> bool {
        self.skip_questions.iter().any(|q| q == question)
    }
}

/// A configuration override as found on disk. Absent keys (and `null`s)
/// leave the default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    #[serde(default)]
    pub types: Option<Vec<CommitType>>,
    #[serde(default)]
    pub symbol: Option<bool>,
    #[serde(default)]
    pub skip_questions: Option<Vec<String>>,
    #[serde(default)]
    pub subject_max_length: Option<usize>,
    #[serde(default)]
    pub subject_min_length: Option<usize>,
    #[serde(default)]
    pub conventional: Option<bool>,
    #[serde(default)]
    pub scopes: Option<Vec<String>>,
    #[serde(default)]
    pub questions: Option<QuestionMessages>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.symbol);
        assert!(config.conventional);
        assert!(config.skip_questions.is_empty());
        assert_eq!(config.subject_max_length, 75);
        assert_eq!(config.subject_min_length, 2);
        assert!(config.scopes.is_none());
        assert_eq!(config.types, default_types());
    }

    #[test]
    fn test_merge_without_types_keeps_default_types() {
        let overrides = ConfigOverride {
            symbol: Some(false),
            ..Default::default()
        };
        let config = Config::default().merge(overrides);
        assert_eq!(config.types, default_types());
        assert!(!config.symbol);
    }

    #[test]
    fn test_merge_types_replaces_not_concatenates() {
        let custom = vec![CommitType::new(":bug:", "fix", "🐛", "Fix it.")];
        let overrides = ConfigOverride {
            types: Some(custom.clone()),
            ..Default::default()
        };
        let config = Config::default().merge(overrides);
        assert_eq!(config.types, custom);
    }

    #[test]
    fn test_merge_questions_is_not_deep() {
        let base = Config {
            questions: Some(QuestionMessages {
                body: Some("Body?".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let overrides = ConfigOverride {
            questions: Some(QuestionMessages {
                subject: Some("Subject?".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let questions = base.merge(overrides).questions.unwrap();
        assert_eq!(questions.subject.as_deref(), Some("Subject?"));
        assert!(questions.body.is_none());
    }

    #[test]
    fn test_override_deserialize_camel_case() {
        let json = r#"{
            "skipQuestions": ["body"],
            "subjectMaxLength": 50,
            "subjectMinLength": 3,
            "conventional": false,
            "scopes": ["api", "ui"],
            "questions": {"type": "Pick one:"},
            "unknownKey": 1
        }"#;
        let o: ConfigOverride = serde_json::from_str(json).unwrap();
        assert_eq!(o.skip_questions, Some(vec!["body".to_string()]));
        assert_eq!(o.subject_max_length, Some(50));
        assert_eq!(o.subject_min_length, Some(3));
        assert_eq!(o.conventional, Some(false));
        assert_eq!(o.scopes.as_ref().map(Vec::len), Some(2));
        assert_eq!(
            o.questions.and_then(|q| q.commit_type).as_deref(),
            Some("Pick one:")
        );
        assert!(o.types.is_none());
    }

    #[test]
    fn test_null_override_keeps_default() {
        let o: ConfigOverride = serde_json::from_str(r#"{"types": null}"#).unwrap();
        let config = Config::default().merge(o);
        assert_eq!(config.types, default_types());
    }

    #[test]
    fn test_skips() {
        let config = Config {
            skip_questions: vec!["scope".to_string(), "issues".to_string()],
            ..Default::default()
        };
        assert!(config.skips("scope"));
        assert!(config.skips("issues"));
        assert!(!config.skips("body"));
    }
}
