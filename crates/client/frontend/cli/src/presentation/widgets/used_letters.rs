//! Used letters panel, in guess order.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::strings;

pub fn render(frame: &mut Frame, area: Rect, used_letters: &str) {
    let paragraph = Paragraph::new(used_letters.to_string())
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(strings::USED_LETTERS),
        );

    frame.render_widget(paragraph, area);
}
