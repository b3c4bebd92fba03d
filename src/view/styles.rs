//! Colors and the pixel-to-cell mapping.

use crate::config::HexColor;
use crate::engine::Viewport;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

/// Style for muted/secondary text (hints, labels).
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

/// Style for the toolbar key hints.
pub const KEY_HINT: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Convert a configured color to a terminal color.
pub fn to_color(color: HexColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Pixel size of one terminal cell.
///
/// The engine lays out text in pixels; the canvas divides pixel positions by
/// this size to find rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    /// Cell width in pixels.
    pub width_px: u16,
    /// Cell height in pixels.
    pub height_px: u16,
}

impl CellSize {
    /// Create a cell size, treating zero as one pixel.
    pub fn new(width_px: u16, height_px: u16) -> Self {
        Self {
            width_px: width_px.max(1),
            height_px: height_px.max(1),
        }
    }

    /// Pixel viewport covered by `area`.
    pub fn viewport_for(&self, area: Rect) -> Viewport {
        Viewport::new(
            u32::from(area.width) * u32::from(self.width_px),
            u32::from(area.height) * u32::from(self.height_px),
        )
    }

    /// Row containing pixel offset `y_px`. Negative offsets give negative rows.
    pub fn row_of(&self, y_px: i32) -> i32 {
        y_px.div_euclid(i32::from(self.height_px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_hex_to_rgb() {
        assert_eq!(to_color(HexColor::rgb(1, 2, 3)), Color::Rgb(1, 2, 3));
    }

    #[test]
    fn viewport_scales_area() {
        let cell = CellSize::new(10, 20);
        assert_eq!(
            cell.viewport_for(Rect::new(0, 0, 80, 22)),
            Viewport::new(800, 440)
        );
    }

    #[test]
    fn rows_floor_toward_negative() {
        let cell = CellSize::new(10, 20);
        assert_eq!(cell.row_of(0), 0);
        assert_eq!(cell.row_of(19), 0);
        assert_eq!(cell.row_of(20), 1);
        assert_eq!(cell.row_of(-1), -1);
        assert_eq!(cell.row_of(-20), -1);
        assert_eq!(cell.row_of(-21), -2);
    }

    #[test]
    fn zero_cell_size_is_clamped() {
        let cell = CellSize::new(0, 0);
        assert_eq!(cell, CellSize::new(1, 1));
    }
}
