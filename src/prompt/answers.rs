//! Answers collected from one run of the question sequence.

use super::choices::ChoiceValue;

/// Answers to the question sequence.
///
/// Fields start empty and are filled as questions are answered; skipped
/// questions leave theirs `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers {
    pub commit_type: Option<ChoiceValue>,
    pub scope: Option<String>,
    /// The complete header line, composed when the subject is accepted.
    pub subject: String,
    pub body: Option<String>,
    pub issues: Option<String>,
    pub breaking_body: Option<String>,
}
