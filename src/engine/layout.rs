//! Wrapped, vertically positioned lines for one viewport and font.

use super::metrics::{FontMetrics, Viewport};
use super::wrap::{char_budget, wrap_text};

/// One wrapped display line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Text of the line, already wrapped to the budget.
    pub text: String,
    /// Top edge in pixels at the reset position (first line sits at the
    /// viewport height, just below the visible area).
    pub top: i32,
    /// Vertical advance in pixels: text height plus inter-line spacing.
    pub height: u32,
}

impl Line {
    /// Bottom edge in pixels at the reset position.
    pub fn bottom(&self) -> i32 {
        self.top + self.height as i32
    }
}

/// The wrapped representation of a document for a viewport and font.
///
/// Never edited in place: any change to the text, viewport width or font
/// size produces a new `Layout` through [`wrap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    lines: Vec<Line>,
    viewport_height: u32,
    total_content_height: u32,
    total_scroll_distance: u32,
    char_budget: usize,
}

impl Layout {
    /// Lines in reading order. Always at least one.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Viewport height the layout was computed for.
    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Sum of all line heights.
    pub fn total_content_height(&self) -> u32 {
        self.total_content_height
    }

    /// Distance the text travels from below the fold until fully gone:
    /// `viewport_height + total_content_height`.
    pub fn total_scroll_distance(&self) -> u32 {
        self.total_scroll_distance
    }

    /// Column budget the lines were wrapped to.
    pub fn char_budget(&self) -> usize {
        self.char_budget
    }
}

/// Wrap `text` into a positioned [`Layout`].
///
/// Deterministic: identical inputs give identical layouts. Empty text gives
/// one empty line.
pub fn wrap(text: &str, viewport: Viewport, metrics: &FontMetrics) -> Layout {
    let budget = char_budget(viewport, metrics);
    let viewport_height = viewport.effective_height();
    let advance = metrics.line_advance();

    let mut top = viewport_height as i32;
    let lines: Vec<Line> = wrap_text(text, budget)
        .into_iter()
        .map(|text| {
            let line = Line {
                text,
                top,
                height: advance,
            };
            top += advance as i32;
            line
        })
        .collect();

    let total_content_height = (top - viewport_height as i32) as u32;

    Layout {
        lines,
        viewport_height,
        total_content_height,
        total_scroll_distance: viewport_height + total_content_height,
        char_budget: budget,
    }
}
