//! Bottom line: status text, or the input prompt while one is open.

use super::styles::MUTED_TEXT;
use crate::state::{AppState, Prompt};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the status bar, or the prompt with a visible cursor.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.prompt() {
        Some(prompt) => render_prompt(frame, area, prompt),
        None => {
            let line = Line::from(vec![
                Span::raw(" "),
                Span::raw(state.status().to_string()),
                Span::styled(
                    format!("  ({})", state.document().origin()),
                    MUTED_TEXT,
                ),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        }
    }
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &Prompt) {
    let label = format!(" {}: ", prompt.kind().label());
    let line = Line::from(vec![
        Span::styled(
            label.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(prompt.input().to_string()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let before_cursor: String = prompt.input().chars().take(prompt.cursor()).collect();
    let offset = (label.width() + before_cursor.width()) as u16;
    let x = area.x.saturating_add(offset).min(area.right().saturating_sub(1));
    frame.set_cursor_position(Position::new(x, area.y));
}
