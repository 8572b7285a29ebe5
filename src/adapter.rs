//! Entry point wiring config, questions, prompting and formatting together.

use tracing::debug;

use crate::config::{Config, resolve_config};
use crate::error::{AdapterError, CommitError};
use crate::format::format_message;
use crate::prompt::{PromptContext, PromptKind, build_questions};

/// Width used when the terminal size cannot be determined.
pub const DEFAULT_WIDTH: usize = 80;

/// Current terminal width in columns.
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .ok()
        .map(|(columns, _)| usize::from(columns))
        .filter(|&columns| columns > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Ask the questions on `ctx` and hand the formatted message to `commit`.
///
/// Configuration is discovered from the working directory and the home
/// directory; the message is fitted to the terminal width.
pub fn prompter<P, F>(ctx: &mut P, commit: F) -> Result<(), AdapterError>
where
    P: PromptContext + ?Sized,
    F: FnOnce(String) -> Result<(), CommitError>,
{
    let config = resolve_config();
    run_prompter(ctx, &config, terminal_width(), commit)
}

/// [`prompter`] with an explicit configuration and width.
pub fn run_prompter<P, F>(
    ctx: &mut P,
    config: &Config,
    width: usize,
    commit: F,
) -> Result<(), AdapterError>
where
    P: PromptContext + ?Sized,
    F: FnOnce(String) -> Result<(), CommitError>,
{
    ctx.register_prompt(PromptKind::Autocomplete);
    ctx.register_prompt(PromptKind::MaxLengthInput);

    let questions = build_questions(config);
    debug!("Asking {} questions", questions.len());

    let answers = ctx.prompt(&questions)?;
    let message = format_message(&answers, width);
    debug!("Formatted message: {} chars", message.len());

    commit(message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PromptError;
    use crate::prompt::{Answers, ChoiceValue, MockPromptContext, QuestionName};
    use mockall::predicate::eq;

    fn scripted_answers() -> Answers {
        Answers {
            commit_type: Some(ChoiceValue {
                emoji: "✨ ".to_string(),
                name: "feat".to_string(),
            }),
            scope: Some(String::new()),
            subject: "feat: ✨  add login".to_string(),
            body: Some("details here".to_string()),
            issues: Some("#3".to_string()),
            breaking_body: None,
        }
    }

    #[test]
    fn test_registers_both_plugins_and_commits() {
        let mut ctx = MockPromptContext::new();
        ctx.expect_register_prompt()
            .with(eq(PromptKind::Autocomplete))
            .times(1)
            .return_const(());
        ctx.expect_register_prompt()
            .with(eq(PromptKind::MaxLengthInput))
            .times(1)
            .return_const(());
        ctx.expect_prompt()
            .times(1)
            .returning(|_| Ok(scripted_answers()));

        let mut committed = None;
        run_prompter(&mut ctx, &Config::default(), 80, |message| {
            committed = Some(message);
            Ok(())
        })
        .unwrap();

        assert_eq!(
            committed.as_deref(),
            Some("feat: ✨  add login\n\ndetails here\n\nCloses #3")
        );
    }

    #[test]
    fn test_questions_follow_config() {
        let config = Config {
            skip_questions: vec!["body".to_string(), "issues".to_string()],
            ..Default::default()
        };
        let mut ctx = MockPromptContext::new();
        ctx.expect_register_prompt().return_const(());
        ctx.expect_prompt()
            .withf(|questions| {
                let names: Vec<_> = questions.iter().map(|q| q.name).collect();
                names == [QuestionName::Type, QuestionName::Scope, QuestionName::Subject]
            })
            .times(1)
            .returning(|_| Ok(scripted_answers()));

        run_prompter(&mut ctx, &config, 80, |_| Ok(())).unwrap();
    }

    #[test]
    fn test_prompt_failure_skips_commit() {
        let mut ctx = MockPromptContext::new();
        ctx.expect_register_prompt().return_const(());
        ctx.expect_prompt()
            .returning(|_| Err(PromptError::NoChoices("type")));

        let mut called = false;
        let result = run_prompter(&mut ctx, &Config::default(), 80, |_| {
            called = true;
            Ok(())
        });

        assert!(matches!(result, Err(AdapterError::Prompt(_))));
        assert!(!called);
    }

    #[test]
    fn test_commit_failure_propagates() {
        let mut ctx = MockPromptContext::new();
        ctx.expect_register_prompt().return_const(());
        ctx.expect_prompt().returning(|_| Ok(scripted_answers()));

        let result = run_prompter(&mut ctx, &Config::default(), 80, |_| {
            Err(CommitError::EmptyMessage)
        });

        assert!(matches!(
            result,
            Err(AdapterError::Commit(CommitError::EmptyMessage))
        ));
    }

    #[test]
    fn test_terminal_width_is_positive() {
        assert!(terminal_width() > 0);
    }
}
