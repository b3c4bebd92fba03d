//! Dismissible notice popup.

use super::constants::{NOTICE_POPUP_HEIGHT, NOTICE_POPUP_WIDTH_PERCENT};
use super::help::centered_fixed;
use super::styles::MUTED_TEXT;
use crate::state::Notice;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render `notice` centered over the frame.
pub fn render_notice(frame: &mut Frame, notice: &Notice) {
    let popup_area = notice_area(frame.area());

    frame.render_widget(Clear, popup_area);

    let body = vec![
        Line::from(notice.message.clone()),
        Line::from(""),
        Line::styled("Enter or Esc to dismiss", MUTED_TEXT).alignment(Alignment::Center),
    ];

    let popup = Paragraph::new(body)
        .block(
            Block::default()
                .title(format!(" {} ", notice.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(popup, popup_area);
}

/// Area the notice occupies in `frame_area`.
pub fn notice_area(frame_area: Rect) -> Rect {
    let width = frame_area.width * NOTICE_POPUP_WIDTH_PERCENT / 100;
    centered_fixed(width, NOTICE_POPUP_HEIGHT, frame_area)
}
