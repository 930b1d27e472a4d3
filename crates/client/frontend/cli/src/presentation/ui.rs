//! Screen composition.
//!
//! [`draw`] routes on the current [`AppMode`] and lays out the widgets for
//! that screen. It only reads state, so it can be exercised against
//! ratatui's `TestBackend`.
use client_frontend_core::{GameViewModel, InputFeedback, MessageEntry, MessageLog};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::presentation::{theme::RatatuiTheme, widgets};
use crate::state::{AppMode, AppState};

/// Everything a frame needs, borrowed from the event loop.
pub struct RenderContext<'a> {
    pub app_state: &'a AppState,
    /// Snapshot of the current round, if one was dealt.
    pub view: Option<&'a GameViewModel>,
    pub feedback: &'a InputFeedback,
    pub messages: &'a MessageLog,
    pub message_panel_height: u16,
}

pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let theme = RatatuiTheme::new();
    let area = frame.area();

    match (&ctx.app_state.mode, ctx.view) {
        (AppMode::Playing, Some(view)) => render_game(frame, area, ctx, view, &theme),
        (AppMode::Finished { status, word, .. }, view) => {
            let stage = view.map(|view| view.stage).unwrap_or_default();
            widgets::end_screen::render(frame, area, *status, word, stage, &theme);
        }
        _ => widgets::start_screen::render(frame, area, &theme),
    }
}

fn render_game(
    frame: &mut Frame,
    area: Rect,
    ctx: &RenderContext,
    view: &GameViewModel,
    theme: &RatatuiTheme,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                // Header
            Constraint::Min(widgets::gallows::HEIGHT as u16 + 2), // Gallows + word
            Constraint::Length(4),                                // Letter input
            Constraint::Length(3),                                // Used letters
            Constraint::Length(ctx.message_panel_height),         // Messages
            Constraint::Length(3),                                // Footer
        ])
        .split(area);

    let board = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(widgets::gallows::WIDTH as u16 + 6),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    widgets::header::render(frame, rows[0], view, theme);
    widgets::gallows::render(frame, board[0], view.stage, theme);
    widgets::guess_word::render(frame, board[1], &view.pattern, theme);
    widgets::letter_input::render(frame, rows[2], &ctx.app_state.input, ctx.feedback, theme);
    widgets::used_letters::render(frame, rows[3], &view.used_letters);

    let visible = ctx.message_panel_height.saturating_sub(2) as usize;
    let recent: Vec<&MessageEntry> = ctx.messages.recent(visible).collect();
    widgets::messages::render(frame, rows[4], &recent, theme);

    widgets::footer::render(frame, rows[5]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameState, GameStatus};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(ctx: &RenderContext) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| draw(frame, ctx)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn start_screen_shows_prompt() {
        let app_state = AppState::default();
        let messages = MessageLog::new(4);
        let ctx = RenderContext {
            app_state: &app_state,
            view: None,
            feedback: &InputFeedback::Empty,
            messages: &messages,
            message_panel_height: 6,
        };

        let text = screen_text(&ctx);
        assert!(text.contains("HANGMAN"));
        assert!(text.contains("Let's start!"));
    }

    #[test]
    fn game_screen_shows_pattern_and_input_error() {
        let mut state = GameState::new("CAT").unwrap();
        state.try_guess("A").unwrap();
        state.try_guess("Z").unwrap();
        let view = GameViewModel::from_state(&state, 1);

        let mut app_state = AppState::default();
        app_state.enter_playing();
        app_state.push_char('q');
        app_state.push_char('x');
        let feedback = InputFeedback::evaluate(&state, &app_state.input);

        let mut messages = MessageLog::new(4);
        messages.push_text("No Z. 8 mistakes left.");

        let ctx = RenderContext {
            app_state: &app_state,
            view: Some(&view),
            feedback: &feedback,
            messages: &messages,
            message_panel_height: 6,
        };

        let text = screen_text(&ctx);
        assert!(text.contains("_ A _"));
        assert!(text.contains("Used letters"));
        assert!(text.contains("A, Z"));
        assert!(text.contains("Char limit is 1 (2)"));
        assert!(text.contains("No Z. 8 mistakes left."));
        assert!(text.contains("Round 1 | Mistakes 1/9"));
    }

    #[test]
    fn end_screen_reveals_word() {
        let mut app_state = AppState::default();
        app_state.enter_finished(GameStatus::Lost, "CAT".to_string());
        let messages = MessageLog::new(4);
        let ctx = RenderContext {
            app_state: &app_state,
            view: None,
            feedback: &InputFeedback::Empty,
            messages: &messages,
            message_panel_height: 6,
        };

        assert!(screen_text(&ctx).contains("You lost! The word was CAT"));
    }
}
