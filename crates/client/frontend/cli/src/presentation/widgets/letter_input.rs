//! Letter field with inline validation and the Check action.
//!
//! The Check label is greyed out unless the field holds a letter that can
//! be guessed; Enter is ignored in that case.

use client_frontend_core::{InputFeedback, PresentationMapper};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;
use crate::strings;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    feedback: &InputFeedback,
    theme: &RatatuiTheme,
) {
    let check_style = if feedback.submit_enabled() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("> {input}"), theme.style_input(feedback)),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        Span::raw("   "),
        Span::styled(format!(" {} ", strings::CHECK), check_style),
    ])];

    if let Some([invalid, limit]) = error_text(feedback) {
        let style = Style::default().fg(Color::LightRed);
        lines.push(Line::from(vec![
            Span::styled(invalid, style),
            Span::raw("   "),
            Span::styled(limit, style),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(strings::ENTER_LETTER)
            .border_style(theme.style_input(feedback)),
    );

    frame.render_widget(paragraph, area);
}

/// Inline error under the field, shown together with the current length.
pub fn error_text(feedback: &InputFeedback) -> Option<[String; 2]> {
    match feedback {
        InputFeedback::Invalid { char_count } => Some([
            strings::INVALID_INPUT.to_string(),
            strings::char_limit(*char_count),
        ]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Letter;

    #[test]
    fn error_shows_both_lines_with_length() {
        let too_long = InputFeedback::Invalid { char_count: 3 };
        assert_eq!(
            error_text(&too_long),
            Some(["Invalid input".to_string(), "Char limit is 1 (3)".to_string()])
        );

        let bad = InputFeedback::Invalid { char_count: 1 };
        assert_eq!(
            error_text(&bad),
            Some(["Invalid input".to_string(), "Char limit is 1 (1)".to_string()])
        );

        let valid = InputFeedback::Valid(Letter::from_char('A').unwrap());
        assert_eq!(error_text(&valid), None);
        assert_eq!(error_text(&InputFeedback::Empty), None);
    }
}
