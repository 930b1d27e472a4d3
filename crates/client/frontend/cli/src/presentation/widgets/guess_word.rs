//! The partially revealed mystery word.

use client_frontend_core::PresentationMapper;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, pattern: &str, theme: &RatatuiTheme) {
    let top_padding = area.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        pattern.to_string(),
        theme.emphasize(Style::default().fg(Color::White)),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Word"));

    frame.render_widget(paragraph, area);
}
