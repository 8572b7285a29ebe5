//! Commit types offered by the type question.

use serde::{Deserialize, Serialize};

/// A selectable kind of change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitType {
    /// Shortcode form of the emoji, used when `symbol` is off.
    pub code: String,
    /// Conventional commit type, e.g. `feat`.
    pub name: String,
    /// Emoji glyph.
    pub emoji: String,
    pub description: String,
}

impl CommitType {
    pub fn new(code: &str, name: &str, emoji: &str, description: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            emoji: emoji.to_string(),
            description: description.to_string(),
        }
    }
}

/// Built-in type list used when no configuration overrides `types`.
pub fn default_types() -> Vec<CommitType> {
    vec![
        CommitType::new(":sparkles:", "feat", "✨", "Introduce new features."),
        CommitType::new(":bug:", "fix", "🐛", "Fix a bug."),
        CommitType::new(":memo:", "docs", "📝", "Add or update documentation."),
        CommitType::new(":art:", "style", "🎨", "Improve structure / format of the code."),
        CommitType::new(":recycle:", "refactor", "♻️", "Refactor code."),
        CommitType::new(":zap:", "perf", "⚡️", "Improve performance."),
        CommitType::new(":white_check_mark:", "test", "✅", "Add, update, or pass tests."),
        CommitType::new(":package:", "build", "📦️", "Add or update compiled files or packages."),
        CommitType::new(":construction_worker:", "ci", "👷", "Add or update CI build system."),
        CommitType::new(":wrench:", "chore", "🔧", "Add or update configuration files."),
        CommitType::new(":rewind:", "revert", "⏪️", "Revert changes."),
        CommitType::new(":lock:", "security", "🔒️", "Fix security issues."),
        CommitType::new(":fire:", "remove", "🔥", "Remove code or files."),
        CommitType::new(":ambulance:", "hotfix", "🚑️", "Critical hotfix."),
        CommitType::new(":tada:", "init", "🎉", "Begin a project."),
        CommitType::new(":bookmark:", "release", "🔖", "Release / Version tags."),
    ]
}
