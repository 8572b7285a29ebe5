//! czmoji - An interactive assistant for emoji-flavoured conventional commits.
//!
//! # Overview
//!
//! czmoji asks for the type, scope, subject, body and closed issues of a
//! change, then renders them into a commit message such as
//! `feat(api): ✨ add login`. Types, scopes, prompts and header style come
//! from `package.json`, a `.czrc`, or `~/.czrc`.

pub mod adapter;
pub mod commit;
pub mod config;
pub mod error;
pub mod format;
pub mod prompt;

// Re-export commonly used types
pub use adapter::{prompter, run_prompter, terminal_width};
pub use config::{CommitType, Config, ConfigOverride, resolve_config, resolve_config_from};
pub use error::{AdapterError, CommitError, ConfigError, PromptError};
pub use format::{format_head, format_issues, format_message};
pub use prompt::{
    Answers, Choice, ChoiceValue, PromptContext, PromptKind, Question, TerminalPrompt,
    build_choices, build_questions,
};
