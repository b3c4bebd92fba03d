//! Greedy word wrapping against a character budget.

use super::metrics::{FontMetrics, Viewport};
use unicode_width::UnicodeWidthStr;

/// Smallest line budget, regardless of viewport or font.
pub const MIN_CHARS_PER_LINE: usize = 20;

/// Fraction of the viewport width text may occupy.
const USABLE_WIDTH_FRACTION: f64 = 0.9;

/// Number of display columns that fit on one line.
///
/// `floor(width * 0.9) / char_width`, never below [`MIN_CHARS_PER_LINE`].
pub fn char_budget(viewport: Viewport, metrics: &FontMetrics) -> usize {
    let usable = (f64::from(viewport.effective_width()) * USABLE_WIDTH_FRACTION) as u32;
    let chars = (usable / metrics.char_width().max(1)) as usize;
    chars.max(MIN_CHARS_PER_LINE)
}

/// Wrap one paragraph (no newlines) into lines of at most `budget` columns.
///
/// Whitespace runs collapse to a single space. A word wider than the budget
/// is never split; it occupies a line of its own. A paragraph with no words
/// yields a single empty line so blank lines keep their spacing.
pub fn wrap_paragraph(paragraph: &str, budget: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for word in paragraph.split_whitespace() {
        let word_width = word.width();

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        if current_width + 1 + word_width <= budget {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Split text into paragraphs on explicit newlines and wrap each one.
pub fn wrap_text(text: &str, budget: usize) -> Vec<String> {
    text.split('\n')
        .map(|paragraph| paragraph.strip_suffix('\r').unwrap_or(paragraph))
        .flat_map(|paragraph| wrap_paragraph(paragraph, budget))
        .collect()
}
