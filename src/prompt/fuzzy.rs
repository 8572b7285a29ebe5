//! Approximate matching for the type search box.
//!
//! A choice matches a query when, for its display name or its code, the
//! query can be found near the start of the text with few edits:
//!
//! ```text
//! score = edits / query length + match start / DISTANCE
//! ```
//!
//! Lower is better; anything above `THRESHOLD` is dropped.

use super::choices::Choice;

pub const THRESHOLD: f64 = 0.4;
pub const DISTANCE: f64 = 100.0;
pub const MAX_PATTERN_LENGTH: usize = 32;

/// Filter and rank `choices` against `query`.
///
/// Results are ordered by score; equal scores keep their list order.
pub fn search<'a>(choices: &'a [Choice], query: &str) -> Vec<&'a Choice> {
    let mut scored: Vec<(&Choice, f64)> = choices
        .iter()
        .filter_map(|choice| {
            [choice.display_name.as_str(), choice.code.as_str()]
                .into_iter()
                .filter_map(|key| score(query, key))
                .min_by(f64::total_cmp)
                .map(|s| (choice, s))
        })
        .collect();

    scored.sort_by(|a, b| a.1.total_cmp(&b.1));
    scored.into_iter().map(|(choice, _)| choice).collect()
}

/// Score `pattern` against `text`, or `None` when it does not match.
pub fn score(pattern: &str, text: &str) -> Option<f64> {
    let pattern: Vec<char> = pattern
        .to_lowercase()
        .chars()
        .take(MAX_PATTERN_LENGTH)
        .collect();
    if pattern.is_empty() {
        return Some(0.0);
    }
    let text: Vec<char> = text.to_lowercase().chars().collect();

    let mut best: Option<f64> = None;
    for start in 0..=text.len() {
        let proximity = start as f64 / DISTANCE;
        if proximity > THRESHOLD {
            break;
        }
        let errors = min_edits_from(&pattern, &text[start..]);
        let s = errors as f64 / pattern.len() as f64 + proximity;
        if s <= THRESHOLD && best.is_none_or(|b| s < b) {
            best = Some(s);
        }
    }
    best
}

/// Fewest edits turning some prefix of `text` into `pattern`.
fn min_edits_from(pattern: &[char], text: &[char]) -> usize {
    // row[j] = edits between the text consumed so far and pattern[..j]
    let mut row: Vec<usize> = (0..=pattern.len()).collect();
    let mut best = row[pattern.len()];

    for (i, &tc) in text.iter().enumerate() {
        let mut next = Vec::with_capacity(row.len());
        next.push(i + 1);
        for (j, &pc) in pattern.iter().enumerate() {
            let substitute = row[j] + usize::from(tc != pc);
            let insert = next[j] + 1;
            let delete = row[j + 1] + 1;
            next.push(substitute.min(insert).min(delete));
        }
        row = next;
        best = best.min(row[pattern.len()]);
        if best == 0 {
            break;
        }
    }
    best
}
