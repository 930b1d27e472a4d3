//! Start screen widget with the title banner and start prompt.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;
use crate::strings;

pub fn render(frame: &mut Frame, area: Rect, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title banner
            Constraint::Min(0),    // Prompt
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_title(frame, chunks[0], theme);
    render_prompt(frame, chunks[1]);
    render_footer(frame, chunks[2], theme);
}

fn render_title(frame: &mut Frame, area: Rect, theme: &RatatuiTheme) {
    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(strings::TITLE, theme.title())),
        Line::from(Span::styled(strings::SUBTITLE, theme.hint())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(title, area);
}

fn render_prompt(frame: &mut Frame, area: Rect) {
    let top_padding = area.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", strings::START_TEXT),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));

    let prompt = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(prompt, area);
}

fn render_footer(frame: &mut Frame, area: Rect, theme: &RatatuiTheme) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[Enter/Space] ", Style::default().fg(Color::Green)),
        Span::raw("Start  "),
        Span::styled("[q/ESC] ", Style::default().fg(Color::Red)),
        Span::raw("Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );

    frame.render_widget(footer, area);
}
