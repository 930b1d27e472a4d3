//! Header widget displaying the round number and mistake count.

use client_frontend_core::{GameViewModel, PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;
use crate::strings;

pub fn render(frame: &mut Frame, area: Rect, view: &GameViewModel, theme: &RatatuiTheme) {
    let text = Line::from(vec![
        Span::styled(
            strings::round_header(view.round, view.failures, view.max_failures),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | "),
        Span::styled(view.status.to_string(), theme.style_status(view.status)),
    ]);

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(strings::TITLE, theme.title())),
    );

    frame.render_widget(paragraph, area);
}
