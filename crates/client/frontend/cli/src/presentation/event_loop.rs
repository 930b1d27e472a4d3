//! Pumps user input, the result-screen timer, and rendering for the CLI client.
use std::future;

use anyhow::Result;
use client_frontend_core::{
    EventConsumer, EventImpact, FrontendConfig, GameSession, InputFeedback, RoundEvent,
};
use crossterm::event::{self, Event, KeyEventKind};
use tokio::time::{self, Duration, Instant};

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::presentation::{terminal::Tui, ui};
use crate::state::{AppMode, AppState};

const FRAME_INTERVAL_MS: u64 = 16;

/// What the loop does after a command.
#[derive(Clone, Copy, Debug)]
pub enum Flow {
    Continue(EventImpact),
    Quit,
}

impl Flow {
    pub const fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }

    pub const fn requires_redraw(&self) -> bool {
        match self {
            Self::Continue(impact) => impact.requires_redraw,
            Self::Quit => false,
        }
    }
}

pub struct EventLoop<C>
where
    C: EventConsumer,
{
    session: GameSession,
    consumer: C,
    app: AppState,
    input: InputHandler,
    end_screen_delay: Duration,
    message_panel_height: u16,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        session: GameSession,
        consumer: C,
        frontend_config: &FrontendConfig,
        cli_config: &CliConfig,
    ) -> Self {
        Self {
            session,
            consumer,
            app: AppState::new(cli_config.ui.input_max_chars),
            input: InputHandler::new(),
            end_screen_delay: frontend_config.rounds.end_screen_delay,
            message_panel_height: cli_config.ui.message_panel_height,
        }
    }

    /// Runs until the player quits, then hands back the consumer.
    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.render(terminal)?;

        loop {
            let deadline = self.app.end_screen_deadline(self.end_screen_delay);

            tokio::select! {
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
                _ = sleep_until(deadline) => {
                    if self.expire_end_screen(Instant::now()) {
                        self.render(terminal)?;
                    }
                }
            }
        }

        Ok(self.consumer)
    }

    fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.input.handle_key(key, &self.app.mode);
                match self.apply(action) {
                    Flow::Quit => Ok(true),
                    Flow::Continue(impact) => {
                        if impact.requires_redraw {
                            self.render(terminal)?;
                        }
                        Ok(false)
                    }
                }
            }
            Event::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Applies one command and reports whether the loop continues.
    pub fn apply(&mut self, action: KeyAction) -> Flow {
        let impact = match action {
            KeyAction::Quit => {
                if let Some(event) = self.session.reset() {
                    self.dispatch(&event);
                }
                tracing::info!(rounds = self.session.round(), "Quitting");
                return Flow::Quit;
            }
            KeyAction::StartRound => {
                let event = self.session.start_round();
                self.app.enter_playing();
                self.dispatch(&event).combine(EventImpact::redraw())
            }
            KeyAction::Type(c) => {
                self.app.push_char(c);
                EventImpact::redraw()
            }
            KeyAction::Erase => {
                self.app.pop_char();
                EventImpact::redraw()
            }
            KeyAction::Submit => self.submit(),
            KeyAction::Back => {
                let impact = match self.session.reset() {
                    Some(event) => self.dispatch(&event),
                    None => EventImpact::none(),
                };
                self.app.enter_start();
                impact.combine(EventImpact::redraw())
            }
            KeyAction::Continue => {
                self.app.enter_start();
                EventImpact::redraw()
            }
            KeyAction::None => EventImpact::none(),
        };
        Flow::Continue(impact)
    }

    fn submit(&mut self) -> EventImpact {
        if !self.session.feedback(&self.app.input).submit_enabled() {
            tracing::debug!(input = %self.app.input, "Check disabled for current input");
            return EventImpact::none();
        }

        let input = self.app.take_input();
        let mut impact = EventImpact::redraw();
        for event in self.session.submit(&input) {
            impact = impact.combine(self.dispatch(&event));
            if let RoundEvent::Ended { status, word, .. } = event {
                self.app.enter_finished(status, word);
            }
        }
        impact
    }

    /// Leaves the result screen once its delay has passed.
    pub fn expire_end_screen(&mut self, now: Instant) -> bool {
        match self.app.end_screen_deadline(self.end_screen_delay) {
            Some(deadline) if now >= deadline => {
                self.app.enter_start();
                true
            }
            _ => false,
        }
    }

    fn dispatch(&mut self, event: &RoundEvent) -> EventImpact {
        self.consumer.on_event(event)
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let view = self.session.view();
        let feedback = match self.app.mode {
            AppMode::Playing => self.session.feedback(&self.app.input),
            _ => InputFeedback::Empty,
        };

        let ctx = ui::RenderContext {
            app_state: &self.app,
            view: view.as_ref(),
            feedback: &feedback,
            messages: self.consumer.message_log(),
            message_panel_height: self.message_panel_height,
        };

        terminal.draw(|frame| ui::draw(frame, &ctx))?;
        Ok(())
    }

    pub fn app_state(&self) -> &AppState {
        &self.app
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn consumer(&self) -> &C {
        &self.consumer
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::{MessageConsumer, MessageLog, RoundDealer};
    use game_content::WordList;
    use game_core::{GameConfig, GameStatus};

    fn event_loop(word: &str) -> EventLoop<MessageConsumer> {
        let words = WordList::new([word], &GameConfig::default()).unwrap();
        let session = GameSession::new(RoundDealer::new(words, GameConfig::default(), 7));
        EventLoop::new(
            session,
            MessageConsumer::new(MessageLog::new(16)),
            &FrontendConfig::default(),
            &CliConfig::default(),
        )
    }

    fn type_and_submit(lp: &mut EventLoop<MessageConsumer>, text: &str) {
        for c in text.chars() {
            lp.apply(KeyAction::Type(c));
        }
        lp.apply(KeyAction::Submit);
    }

    #[test]
    fn winning_round_shows_result_then_returns_to_start() {
        let mut lp = event_loop("cat");
        lp.apply(KeyAction::StartRound);
        assert_eq!(lp.app_state().mode, AppMode::Playing);

        for letter in ["c", "a", "t"] {
            type_and_submit(&mut lp, letter);
        }

        let AppMode::Finished { status, word, .. } = &lp.app_state().mode else {
            panic!("expected result screen");
        };
        assert_eq!(*status, GameStatus::Won);
        assert_eq!(word, "CAT");

        assert!(!lp.expire_end_screen(Instant::now()));
        let later = Instant::now() + FrontendConfig::default().rounds.end_screen_delay;
        assert!(lp.expire_end_screen(later));
        assert_eq!(lp.app_state().mode, AppMode::Start);
    }

    #[test]
    fn invalid_input_is_not_submitted() {
        let mut lp = event_loop("cat");
        lp.apply(KeyAction::StartRound);

        type_and_submit(&mut lp, "ca");
        assert_eq!(lp.app_state().input, "CA");
        assert!(lp.session().state().unwrap().used_letters().is_empty());

        lp.apply(KeyAction::Erase);
        lp.apply(KeyAction::Submit);
        assert!(lp.app_state().input.is_empty());
        assert_eq!(lp.session().state().unwrap().pattern().to_string(), "C__");
    }

    #[test]
    fn back_abandons_round() {
        let mut lp = event_loop("cat");
        lp.apply(KeyAction::StartRound);
        lp.apply(KeyAction::Back);

        assert_eq!(lp.app_state().mode, AppMode::Start);
        assert!(lp.session().state().is_none());
        let last = lp.consumer().message_log().recent(1).next().unwrap();
        assert_eq!(last.text, "Round abandoned. The word was CAT.");
    }

    #[test]
    fn quit_stops_loop() {
        let mut lp = event_loop("cat");
        assert!(!lp.apply(KeyAction::StartRound).is_quit());
        assert!(lp.apply(KeyAction::Quit).is_quit());
    }

    #[test]
    fn redraws_only_when_something_changed() {
        let mut lp = event_loop("cat");
        assert!(!lp.apply(KeyAction::None).requires_redraw());
        assert!(lp.apply(KeyAction::StartRound).requires_redraw());

        assert!(lp.apply(KeyAction::Type('x')).requires_redraw());
        assert!(lp.apply(KeyAction::Type('y')).requires_redraw());
        // Check is disabled for "XY", so nothing is submitted.
        assert!(!lp.apply(KeyAction::Submit).requires_redraw());

        lp.apply(KeyAction::Erase);
        let before = lp.consumer().message_log().len();
        assert!(lp.apply(KeyAction::Submit).requires_redraw());
        assert_eq!(lp.consumer().message_log().len(), before + 1);
    }
}
