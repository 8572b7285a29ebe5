//! Interactive question sequence: choices, questions, and the prompt
//! engine they run on.

pub mod answers;
pub mod choices;
pub mod fuzzy;
pub mod questions;
pub mod terminal;

use std::fmt;

pub use answers::Answers;
pub use choices::{Choice, ChoiceValue, build_choices};
pub use questions::{
    Filter, Question, QuestionKind, QuestionName, Response, ScopeChoice, Validator,
    build_questions,
};
pub use terminal::TerminalPrompt;

use crate::error::PromptError;

/// Kinds of prompt a question can need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    /// Searchable selection list. Must be registered.
    Autocomplete,
    /// Text input with a length limit. Must be registered.
    MaxLengthInput,
    List,
    Input,
}

impl PromptKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::Autocomplete => "autocomplete",
            PromptKind::MaxLengthInput => "maxlength-input",
            PromptKind::List => "list",
            PromptKind::Input => "input",
        }
    }

    /// Whether every prompt engine supports this kind without registration.
    pub fn is_builtin(&self) -> bool {
        matches!(self, PromptKind::List | PromptKind::Input)
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A prompt engine that can ask the question sequence.
///
/// This abstraction allows scripting the answers in tests.
#[cfg_attr(test, mockall::automock)]
pub trait PromptContext {
    /// Enable a non-builtin prompt kind.
    fn register_prompt(&mut self, kind: PromptKind);

    /// Ask `questions` in order and return the collected answers.
    fn prompt(&mut self, questions: &[Question]) -> Result<Answers, PromptError>;
}
