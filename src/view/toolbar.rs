//! Top toolbar: key hints and the current settings.

use super::styles::{KEY_HINT, MUTED_TEXT};
use crate::config::StyleConfig;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HINTS: [(&str, &str); 5] = [
    ("r", "Reset"),
    ("o", "Open"),
    ("e", "Edit"),
    ("↑↓", "Speed"),
    ("?", "Help"),
];

/// Build the toolbar line for `style`.
pub fn toolbar_line(style: &StyleConfig, running: bool) -> Line<'static> {
    let toggle = if running { "Pause" } else { "Start" };
    let mut spans = vec![
        Span::raw(" "),
        Span::styled("Space", KEY_HINT),
        Span::raw(format!(" {toggle}  ")),
    ];

    for (key, label) in HINTS {
        spans.push(Span::styled(key, KEY_HINT));
        spans.push(Span::raw(format!(" {label}  ")));
    }

    spans.push(Span::styled("│ ", MUTED_TEXT));
    spans.push(Span::raw(format!(
        "Speed {}  Font {}px  Shadow {}",
        style.speed.get(),
        style.font_size.get(),
        if style.shadow_enabled { "On" } else { "Off" }
    )));

    Line::from(spans)
}

/// Render the toolbar into `area`.
pub fn render_toolbar(frame: &mut Frame, area: Rect, style: &StyleConfig, running: bool) {
    let toolbar =
        Paragraph::new(toolbar_line(style, running)).style(Style::default().bg(Color::Black));
    frame.render_widget(toolbar, area);
}
