//! Commit message rendering.

pub mod text;

use std::sync::OnceLock;

use regex_lite::Regex;

use crate::prompt::{Answers, ChoiceValue};

pub use text::{truncate, wrap};

fn issue_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#\d+").expect("issue pattern is valid"))
}

fn format_scope(scope: &str) -> String {
    if scope.is_empty() {
        String::new()
    } else {
        format!("({scope})")
    }
}

/// Compose the header line from the type, scope and subject text.
///
/// ```text
/// conventional:  feat(api): ✨ add login
/// otherwise:     ✨ (api) add login
/// ```
pub fn format_head(
    commit_type: &ChoiceValue,
    scope: &str,
    subject: &str,
    conventional: bool,
) -> String {
    let scope = format_scope(scope);
    let prelude = if conventional {
        format!("{}{}: {}", commit_type.name, scope, commit_type.emoji)
    } else {
        format!("{} {}", commit_type.emoji, scope)
    };
    format!("{prelude} {subject}")
}

/// Build the `Closes #1, closes #2` footer from free-form issue text.
///
/// Every `#<digits>` reference is kept in order, duplicates included.
/// Text without references yields no footer.
pub fn format_issues(issues: &str) -> String {
    let refs: Vec<&str> = issue_pattern()
        .find_iter(issues)
        .map(|m| m.as_str())
        .collect();
    if refs.is_empty() {
        return String::new();
    }
    format!("Closes {}", refs.join(", closes "))
}

/// Render the final commit message: header, body, breaking change note and
/// issue footer, separated by blank lines. Empty parts are left out.
pub fn format_message(answers: &Answers, width: usize) -> String {
    let head = truncate(&answers.subject, width);
    let body = wrap(answers.body.as_deref().unwrap_or(""), width);
    let breaking = match answers.breaking_body.as_deref().map(str::trim) {
        Some(note) if !note.is_empty() => wrap(&format!("BREAKING CHANGE: {note}"), width),
        _ => String::new(),
    };
    let footer = format_issues(answers.issues.as_deref().unwrap_or(""));

    [head, body, breaking, footer]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string()
}
