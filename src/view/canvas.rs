//! The scrolling script canvas.
//!
//! Line positions come from the engine in pixels. Each line lands on row
//! `floor(top / cell_height)` of the canvas and is centered horizontally.
//! Lines above or below the canvas are clipped.

use super::styles::{to_color, CellSize};
use crate::config::{HexColor, StyleConfig};
use crate::engine::{Layout, ScrollState};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use unicode_width::UnicodeWidthStr;

/// Renders the visible part of a [`Layout`] at the current scroll position.
pub struct PrompterCanvas<'a> {
    layout: &'a Layout,
    scroll: &'a ScrollState,
    style: StyleConfig,
    cell: CellSize,
}

impl<'a> PrompterCanvas<'a> {
    /// Create a canvas for one frame.
    pub fn new(
        layout: &'a Layout,
        scroll: &'a ScrollState,
        style: StyleConfig,
        cell: CellSize,
    ) -> Self {
        Self {
            layout,
            scroll,
            style,
            cell,
        }
    }

    /// Each line that can show in `area`, as `(row + 1, col, text)`
    /// relative to the area. Rows are shifted by one so a line just above the
    /// top, whose shadow is still visible, fits in a `u16`.
    fn visible_lines(&self, area: Rect) -> Vec<(u16, u16, &'a str)> {
        let displacement = self.scroll.displacement(self.layout);
        let rows = i32::from(area.height);

        self.layout
            .lines()
            .iter()
            .filter_map(|line| {
                let row = self.cell.row_of(line.top + displacement);
                // One extra row above so a shadow can peek in.
                if row < -1 || row >= rows {
                    return None;
                }
                let shifted = u16::try_from(row + 1).ok()?;
                let width = line.text.width();
                let col = usize::from(area.width).saturating_sub(width) / 2;
                Some((shifted, col as u16, line.text.as_str()))
            })
            .collect()
    }
}

impl Widget for PrompterCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg = to_color(self.style.bg_color);

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_bg(bg);
                }
            }
        }

        let lines = self.visible_lines(area);

        if self.style.shadow_enabled {
            let shadow = Style::default().fg(to_color(HexColor::BLACK)).bg(bg);
            for &(shifted_row, col, text) in &lines {
                draw_words(buf, area, shifted_row + 1, col + 1, text, shadow);
            }
        }

        let text_style = Style::default().fg(to_color(self.style.text_color)).bg(bg);
        for &(shifted_row, col, text) in &lines {
            draw_words(buf, area, shifted_row, col, text, text_style);
        }

        render_progress_bar(self.scroll.progress, area, buf);
    }
}

/// Draw `text` word by word at a shifted row, leaving the gaps between words
/// untouched so a shadow underneath stays visible.
fn draw_words(buf: &mut Buffer, area: Rect, shifted_row: u16, col: u16, text: &str, style: Style) {
    let Some(row) = shifted_row.checked_sub(1) else {
        return;
    };
    if row >= area.height {
        return;
    }
    let y = area.y + row;

    let mut offset = usize::from(col);
    for word in text.split(' ') {
        if offset >= usize::from(area.width) {
            break;
        }
        if !word.is_empty() {
            let x = area.x + offset as u16;
            let max_width = usize::from(area.width) - offset;
            buf.set_stringn(x, y, word, max_width, style);
        }
        offset += word.width() + 1;
    }
}

/// Fill `round(progress * width)` cells of the bottom row in green.
fn render_progress_bar(progress: f64, area: Rect, buf: &mut Buffer) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let filled = (progress.clamp(0.0, 1.0) * f64::from(area.width)).round() as u16;
    let y = area.bottom() - 1;
    let green = to_color(HexColor::PROGRESS_GREEN);

    for x in area.left()..area.left() + filled.min(area.width) {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(" ");
            cell.set_bg(green);
        }
    }
}
