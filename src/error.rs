//! Error types for czmoji modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

use crate::prompt::PromptKind;

/// Errors from a single configuration lookup.
///
/// The resolver treats every variant as "not found" and moves on to the
/// next source; these never reach the caller of `resolve_config`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} has no czmoji configuration", path.display())]
    MissingField { path: PathBuf },

    #[error("No {0} found in any ancestor directory")]
    NotFound(String),

    #[error("Home directory could not be determined")]
    NoHomeDir,
}

/// Errors from running the question sequence.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt type '{0}' is not registered")]
    UnregisteredKind(PromptKind),

    #[error("Question '{question}' needs the '{missing}' answer first")]
    MissingAnswer {
        question: &'static str,
        missing: &'static str,
    },

    #[error("Question '{0}' has no choices to select from")]
    NoChoices(&'static str),

    #[error("Invalid answer for '{question}': {reason}")]
    InvalidAnswer {
        question: &'static str,
        reason: String,
    },

    #[error("Terminal interaction failed: {0}")]
    Interaction(#[from] dialoguer::Error),
}

/// Errors from handing the finished message to git.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Refusing to commit an empty message")]
    EmptyMessage,

    #[error("Failed to run git commit: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git commit exited with {}: {stderr}",
             code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit { code: Option<i32>, stderr: String },
}

/// Errors from the adapter pipeline.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Commit(#[from] CommitError),
}
