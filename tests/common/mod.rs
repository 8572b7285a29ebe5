//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use czmoji::prompt::{QuestionKind, QuestionName, Response};
use czmoji::{Answers, PromptContext, PromptError, PromptKind, Question};

/// Write `content` to `dir/name`, creating parent directories.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(&path, content).expect("Failed to write file");
    path
}

/// Wrap czmoji settings the way every config file stores them.
pub fn settings_file(settings: &str) -> String {
    format!(r#"{{"config": {{"g-cz-emoji": {settings}}}}}"#)
}

/// A prompt engine that answers from a script instead of a terminal.
///
/// Text answers are taken in order per question. For the type question the
/// script holds a search query and the first match is selected.
#[derive(Default)]
pub struct ScriptedPrompt {
    script: HashMap<QuestionName, VecDeque<String>>,
    registered: HashSet<PromptKind>,
    pub asked: Vec<QuestionName>,
    pub rejected: Vec<(QuestionName, String)>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for `name`. Answers that fail validation are
    /// recorded in `rejected` and the next queued answer is tried.
    pub fn answer(mut self, name: QuestionName, text: &str) -> Self {
        self.script
            .entry(name)
            .or_default()
            .push_back(text.to_string());
        self
    }

    fn next(&mut self, name: QuestionName) -> Result<String, PromptError> {
        self.script
            .get_mut(&name)
            .and_then(VecDeque::pop_front)
            .ok_or(PromptError::NoChoices(name.as_str()))
    }

    fn respond(&mut self, question: &Question) -> Result<Response, PromptError> {
        loop {
            let text = self.next(question.name)?;
            match &question.kind {
                QuestionKind::Autocomplete { .. } => {
                    if let Some(choice) = question.search(&text).first() {
                        return Ok(Response::Choice(choice.value.clone()));
                    }
                    self.rejected.push((question.name, text));
                }
                QuestionKind::List { choices } => {
                    if let Some(choice) = choices.iter().find(|c| c.label == text) {
                        return Ok(Response::Text(choice.value.clone()));
                    }
                    self.rejected.push((question.name, text));
                }
                QuestionKind::MaxLengthInput { .. } | QuestionKind::Input => {
                    match question.validate(&text) {
                        Ok(()) => return Ok(Response::Text(text)),
                        Err(reason) => self.rejected.push((question.name, reason)),
                    }
                }
            }
        }
    }
}

impl PromptContext for ScriptedPrompt {
    fn register_prompt(&mut self, kind: PromptKind) {
        self.registered.insert(kind);
    }

    fn prompt(&mut self, questions: &[Question]) -> Result<Answers, PromptError> {
        let mut answers = Answers::default();
        for question in questions {
            let kind = question.kind.prompt_kind();
            if !kind.is_builtin() && !self.registered.contains(&kind) {
                return Err(PromptError::UnregisteredKind(kind));
            }
            self.asked.push(question.name);
            let response = self.respond(question)?;
            question.record(response, &mut answers)?;
        }
        Ok(answers)
    }
}
