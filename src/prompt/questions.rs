//! The question sequence and the rules attached to each question.

use super::answers::Answers;
use super::choices::{Choice, ChoiceValue, build_choices};
use super::fuzzy;
use super::PromptKind;
use crate::config::Config;
use crate::error::PromptError;
use crate::format::format_head;

/// Which answer a question fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionName {
    Type,
    Scope,
    Subject,
    Body,
    Issues,
}

impl QuestionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Scope => "scope",
            Self::Subject => "subject",
            Self::Body => "body",
            Self::Issues => "issues",
        }
    }

    fn default_message(&self) -> &'static str {
        match self {
            Self::Type => "Select the type of change you're committing:",
            Self::Scope => "Specify a scope:",
            Self::Subject => "Write a short description:",
            Self::Body => "Provide a longer description:",
            Self::Issues => "List any issues closed by this change (e.g. #1, #2), or press enter:",
        }
    }
}

/// An entry in a closed scope list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeChoice {
    pub label: String,
    pub value: String,
}

/// How a question is asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Searchable list of commit types.
    Autocomplete { choices: Vec<Choice> },
    /// Closed list of scopes.
    List { choices: Vec<ScopeChoice> },
    /// Free text bounded to `max_length` characters.
    MaxLengthInput { max_length: usize },
    /// Free text.
    Input,
}

impl QuestionKind {
    pub fn prompt_kind(&self) -> PromptKind {
        match self {
            Self::Autocomplete { .. } => PromptKind::Autocomplete,
            Self::List { .. } => PromptKind::List,
            Self::MaxLengthInput { .. } => PromptKind::MaxLengthInput,
            Self::Input => PromptKind::Input,
        }
    }
}

/// Acceptance rule for free-text answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// At least two words, the last one longer than `min_length`.
    SubjectWords { min_length: usize },
}

impl Validator {
    pub fn check(&self, input: &str) -> Result<(), String> {
        match *self {
            Validator::SubjectWords { min_length } => {
                let words: Vec<&str> = input.split_whitespace().collect();
                let long_enough = words
                    .last()
                    .is_some_and(|last| last.chars().count() > min_length);
                if words.len() > 1 && long_enough {
                    return Ok(());
                }
                let detail = if min_length > 1 {
                    format!(", with a last word longer than {min_length} characters")
                } else {
                    String::new()
                };
                Err(format!("A description of at least two words is required{detail}"))
            }
        }
    }
}

/// Transformation applied to an accepted answer before it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Turn the subject into the full header line using the type and
    /// scope answered earlier.
    Header { conventional: bool },
}

/// A raw answer as produced by a prompt engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Choice(ChoiceValue),
    Text(String),
}

/// One prompt in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: QuestionName,
    pub message: String,
    pub kind: QuestionKind,
    pub validator: Option<Validator>,
    pub filter: Option<Filter>,
}

impl Question {
    fn new(name: QuestionName, config: &Config, kind: QuestionKind) -> Self {
        Self {
            name,
            message: message_for(name, config),
            kind,
            validator: None,
            filter: None,
        }
    }

    /// Choices for the autocomplete question: everything for an empty
    /// query, fuzzy-filtered otherwise.
    pub fn search(&self, query: &str) -> Vec<&Choice> {
        match &self.kind {
            QuestionKind::Autocomplete { choices } if query.is_empty() => choices.iter().collect(),
            QuestionKind::Autocomplete { choices } => fuzzy::search(choices, query),
            _ => Vec::new(),
        }
    }

    /// Check a free-text answer. The error is shown to the user, who may
    /// then try again.
    pub fn validate(&self, input: &str) -> Result<(), String> {
        if let QuestionKind::MaxLengthInput { max_length } = self.kind {
            let len = input.chars().count();
            if len > max_length {
                return Err(format!("Must be at most {max_length} characters (got {len})"));
            }
        }
        match &self.validator {
            Some(validator) => validator.check(input),
            None => Ok(()),
        }
    }

    /// Validate, filter and store `response` into `answers`.
    pub fn record(&self, response: Response, answers: &mut Answers) -> Result<(), PromptError> {
        match (self.name, response) {
            (QuestionName::Type, Response::Choice(value)) => answers.commit_type = Some(value),
            (QuestionName::Type, Response::Text(_)) => {
                return Err(self.invalid("expected a selection"));
            }
            (_, Response::Choice(_)) => return Err(self.invalid("expected text")),
            (QuestionName::Scope, Response::Text(text)) => {
                answers.scope = Some(self.accept(text, answers)?);
            }
            (QuestionName::Subject, Response::Text(text)) => {
                answers.subject = self.accept(text, answers)?;
            }
            (QuestionName::Body, Response::Text(text)) => {
                answers.body = Some(self.accept(text, answers)?);
            }
            (QuestionName::Issues, Response::Text(text)) => {
                answers.issues = Some(self.accept(text, answers)?);
            }
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> PromptError {
        PromptError::InvalidAnswer {
            question: self.name.as_str(),
            reason: reason.to_string(),
        }
    }

    fn accept(&self, text: String, answers: &Answers) -> Result<String, PromptError> {
        self.validate(&text).map_err(|reason| self.invalid(&reason))?;
        self.apply_filter(text, answers)
    }

    fn apply_filter(&self, text: String, answers: &Answers) -> Result<String, PromptError> {
        match self.filter {
            Some(Filter::Header { conventional }) => {
                let commit_type = answers.commit_type.as_ref().ok_or(PromptError::MissingAnswer {
                    question: self.name.as_str(),
                    missing: QuestionName::Type.as_str(),
                })?;
                let scope = answers.scope.as_deref().unwrap_or("");
                Ok(format_head(commit_type, scope, &text, conventional))
            }
            None => Ok(text),
        }
    }
}

fn message_for(name: QuestionName, config: &Config) -> String {
    let overridden = config.questions.as_ref().and_then(|q| match name {
        QuestionName::Type => q.commit_type.clone(),
        QuestionName::Scope => q.scope.clone(),
        QuestionName::Subject => q.subject.clone(),
        QuestionName::Body => q.body.clone(),
        QuestionName::Issues => q.issues.clone(),
    });
    overridden.unwrap_or_else(|| name.default_message().to_string())
}

/// Build the question sequence for `config`.
///
/// Order matters: the subject's header filter reads the type and scope
/// answers. Questions named in `skipQuestions` are left out entirely.
pub fn build_questions(config: &Config) -> Vec<Question> {
    let mut questions = Vec::with_capacity(5);

    questions.push(Question::new(
        QuestionName::Type,
        config,
        QuestionKind::Autocomplete {
            choices: build_choices(&config.types, config.symbol),
        },
    ));

    if !config.skips(QuestionName::Scope.as_str()) {
        let kind = match &config.scopes {
            Some(scopes) => {
                let none = ScopeChoice {
                    label: "[none]".to_string(),
                    value: String::new(),
                };
                let listed = scopes.iter().map(|s| ScopeChoice {
                    label: s.clone(),
                    value: s.clone(),
                });
                QuestionKind::List {
                    choices: std::iter::once(none).chain(listed).collect(),
                }
            }
            None => QuestionKind::Input,
        };
        questions.push(Question::new(QuestionName::Scope, config, kind));
    }

    let mut subject = Question::new(
        QuestionName::Subject,
        config,
        QuestionKind::MaxLengthInput {
            max_length: config.subject_max_length,
        },
    );
    subject.validator = Some(Validator::SubjectWords {
        min_length: config.subject_min_length,
    });
    subject.filter = Some(Filter::Header {
        conventional: config.conventional,
    });
    questions.push(subject);

    for name in [QuestionName::Body, QuestionName::Issues] {
        if !config.skips(name.as_str()) {
            questions.push(Question::new(name, config, QuestionKind::Input));
        }
    }

    questions
}
