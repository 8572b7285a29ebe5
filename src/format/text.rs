//! Width-aware text helpers. Widths are counted in characters.

const ELLIPSIS: char = '…';

/// Clamp `text` to `width` characters, marking the cut with an ellipsis.
///
/// Counts characters, not display columns: a wide glyph such as an emoji
/// still counts as one, so the result can overrun `width` by a column or two.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push(ELLIPSIS);
    out
}

/// Greedy word wrap at `width` columns.
///
/// Existing line breaks are kept. Lines are broken only at single spaces;
/// runs of spaces and tabs inside a line stay as written, and each output
/// line is trimmed at its edges. Words longer than `width` are not split
/// and end up alone on their line.
pub fn wrap(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, word) in line.split(' ').enumerate() {
        let separator = usize::from(i > 0);
        let fits = current.chars().count() + separator + word.chars().count() <= width;
        if !word.is_empty() && !current.trim().is_empty() && !fits {
            lines.push(current.trim().to_string());
            current = word.to_string();
        } else {
            if i > 0 {
                current.push(' ');
            }
            current.push_str(word);
        }
    }
    lines.push(current.trim().to_string());

    lines.join("\n")
}
