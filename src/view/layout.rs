//! Screen layout: toolbar, canvas and status bar.
//!
//! Pure layout logic. Fullscreen gives the whole frame to the canvas.

use super::constants::{STATUS_BAR_HEIGHT, TOOLBAR_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Key hints and settings, hidden in fullscreen.
    pub toolbar: Option<Rect>,
    /// Where the script scrolls.
    pub canvas: Rect,
    /// Status text or the input prompt, hidden in fullscreen.
    pub status_bar: Option<Rect>,
}

/// Split `area` into toolbar, canvas and status bar.
pub fn calculate_areas(area: Rect, fullscreen: bool) -> ScreenAreas {
    if fullscreen {
        return ScreenAreas {
            toolbar: None,
            canvas: area,
            status_bar: None,
        };
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenAreas {
        toolbar: Some(chunks[0]),
        canvas: chunks[1],
        status_bar: Some(chunks[2]),
    }
}
