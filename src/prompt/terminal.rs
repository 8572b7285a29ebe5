//! Terminal prompt engine built on dialoguer.

use std::collections::HashSet;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use tracing::debug;

use super::questions::{Question, QuestionKind, Response};
use super::{Answers, PromptContext, PromptKind};
use crate::error::PromptError;

/// Asks questions on the controlling terminal.
pub struct TerminalPrompt {
    registered: HashSet<PromptKind>,
    theme: ColorfulTheme,
    breaking_body: Option<String>,
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self {
            registered: HashSet::new(),
            theme: ColorfulTheme::default(),
            breaking_body: None,
        }
    }
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the breaking change note of every answer set.
    pub fn with_breaking_change(mut self, text: Option<String>) -> Self {
        self.breaking_body = text;
        self
    }

    pub fn is_registered(&self, kind: PromptKind) -> bool {
        kind.is_builtin() || self.registered.contains(&kind)
    }

    fn ask(&self, question: &Question) -> Result<Response, PromptError> {
        match &question.kind {
            QuestionKind::Autocomplete { .. } => self.ask_autocomplete(question),
            QuestionKind::List { choices } => {
                if choices.is_empty() {
                    return Err(PromptError::NoChoices(question.name.as_str()));
                }
                let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
                let index = Select::with_theme(&self.theme)
                    .with_prompt(&question.message)
                    .items(&labels)
                    .default(0)
                    .interact()?;
                Ok(Response::Text(choices[index].value.clone()))
            }
            QuestionKind::MaxLengthInput { .. } | QuestionKind::Input => {
                let text: String = Input::with_theme(&self.theme)
                    .with_prompt(&question.message)
                    .allow_empty(true)
                    .validate_with(|input: &String| question.validate(input))
                    .interact_text()?;
                Ok(Response::Text(text))
            }
        }
    }

    /// Ask for a search query, then select among the matching types.
    /// An empty query lists every type.
    fn ask_autocomplete(&self, question: &Question) -> Result<Response, PromptError> {
        if question.search("").is_empty() {
            return Err(PromptError::NoChoices(question.name.as_str()));
        }

        loop {
            let query: String = Input::with_theme(&self.theme)
                .with_prompt(format!("{} (search, enter to list all)", question.message))
                .allow_empty(true)
                .interact_text()?;

            let matches = question.search(&query);
            if matches.is_empty() {
                eprintln!("No type matches '{}'", query);
                continue;
            }

            let items: Vec<&str> = matches.iter().map(|c| c.display_name.as_str()).collect();
            let index = Select::with_theme(&self.theme)
                .with_prompt(&question.message)
                .items(&items)
                .default(0)
                .interact()?;

            return Ok(Response::Choice(matches[index].value.clone()));
        }
    }
}

impl PromptContext for TerminalPrompt {
    fn register_prompt(&mut self, kind: PromptKind) {
        debug!("Registering prompt kind '{}'", kind);
        self.registered.insert(kind);
    }

    fn prompt(&mut self, questions: &[Question]) -> Result<Answers, PromptError> {
        if let Some(missing) = questions
            .iter()
            .map(|q| q.kind.prompt_kind())
            .find(|kind| !self.is_registered(*kind))
        {
            return Err(PromptError::UnregisteredKind(missing));
        }

        let mut answers = Answers {
            breaking_body: self.breaking_body.clone(),
            ..Default::default()
        };

        for question in questions {
            let response = self.ask(question)?;
            question.record(response, &mut answers)?;
            debug!("Answered '{}'", question.name.as_str());
        }

        Ok(answers)
    }
}
