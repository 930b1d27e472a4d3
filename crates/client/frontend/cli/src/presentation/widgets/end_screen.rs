//! Result screen shown when a round is won or lost.

use client_frontend_core::PresentationMapper;
use game_core::{GallowsStage, GameStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{theme::RatatuiTheme, widgets::gallows};
use crate::strings;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    status: GameStatus,
    word: &str,
    stage: GallowsStage,
    theme: &RatatuiTheme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(gallows::HEIGHT as u16 + 2),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    gallows::render(frame, chunks[1], stage, theme);

    let headline = result_text(status, word);
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(headline, theme.style_status(status))),
        Line::from(Span::styled("Press any key to continue", theme.hint())),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, chunks[2]);
}

pub fn result_text(status: GameStatus, word: &str) -> String {
    match status {
        GameStatus::Won => strings::won_text(word),
        _ => strings::lost_text(word),
    }
}
