//! Display-ready selection items for the type question.

use crate::config::CommitType;

/// What a selected type contributes to the commit header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceValue {
    /// Emoji glyph followed by a space, or the shortcode when symbols are off.
    pub emoji: String,
    /// Conventional commit type name.
    pub name: String,
}

/// One entry in the type selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub display_name: String,
    pub value: ChoiceValue,
    pub code: String,
}

/// Build aligned selection items, one per type, in input order.
///
/// Every name is padded to the length of the longest one so emojis and
/// descriptions line up in a column.
pub fn build_choices(types: &[CommitType], symbol: bool) -> Vec<Choice> {
    let width = types
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(0);

    types
        .iter()
        .map(|t| Choice {
            display_name: format!(
                "{:<width$}  {}  {}",
                t.name,
                t.emoji,
                t.description,
                width = width
            ),
            value: ChoiceValue {
                emoji: if symbol {
                    format!("{} ", t.emoji)
                } else {
                    t.code.clone()
                },
                name: t.name.clone(),
            },
            code: t.code.clone(),
        })
        .collect()
}
