//! Frontend-agnostic controller for a play session.
//!
//! [`GameSession`] owns the dealer and the single active [`GameState`]. UI
//! layers forward raw input here and render from the returned events and
//! view models, so the rules stay out of widget code.
use game_core::{GameState, GameStatus, GuessError};

use crate::dealer::RoundDealer;
use crate::event::RoundEvent;
use crate::view_model::{GameViewModel, InputFeedback};

pub struct GameSession {
    dealer: RoundDealer,
    current: Option<GameState>,
}

impl GameSession {
    pub fn new(dealer: RoundDealer) -> Self {
        Self {
            dealer,
            current: None,
        }
    }

    /// Discards any previous round and deals a new one.
    pub fn start_round(&mut self) -> RoundEvent {
        let state = self.dealer.deal();
        let round = self.dealer.rounds_dealt();
        let length = state.mystery_word().len();
        tracing::info!(round, length, "Round started");

        self.current = Some(state);
        RoundEvent::Started { round, length }
    }

    /// Submits raw text-field input as a guess.
    ///
    /// Returns the events produced, in order: a `Rejected` event for unusable
    /// input, otherwise `Guessed` followed by `Ended` if the guess finished
    /// the round. Nothing happens when no round has been started.
    pub fn submit(&mut self, input: &str) -> Vec<RoundEvent> {
        let round = self.round();
        let Some(state) = self.current.as_mut() else {
            tracing::warn!("Guess submitted with no active round");
            return Vec::new();
        };

        let outcome = match state.try_guess(input) {
            Ok(outcome) => outcome,
            Err(error) => {
                log_rejection(round, input, &error);
                return vec![RoundEvent::Rejected {
                    round,
                    input: input.to_string(),
                    error,
                }];
            }
        };

        tracing::debug!(
            round,
            letter = %outcome.letter(),
            hit = outcome.is_hit(),
            failures = state.failures(),
            "Guess applied"
        );

        let mut events = vec![RoundEvent::Guessed {
            round,
            outcome,
            remaining: state.remaining_failures(),
        }];

        let status = state.status();
        if status.is_finished() {
            tracing::info!(
                round,
                status = %status,
                guesses = state.used_letters().len(),
                "Round finished"
            );
            events.push(RoundEvent::Ended {
                round,
                status,
                word: state.mystery_word().to_string(),
            });
        }

        events
    }

    /// Drops the current round. Reports `Abandoned` if it was still in progress.
    pub fn reset(&mut self) -> Option<RoundEvent> {
        let round = self.round();
        let state = self.current.take()?;
        if state.is_finished() {
            return None;
        }
        tracing::info!(round, "Round abandoned");
        Some(RoundEvent::Abandoned {
            round,
            word: state.mystery_word().to_string(),
        })
    }

    pub fn state(&self) -> Option<&GameState> {
        self.current.as_ref()
    }

    pub fn status(&self) -> Option<GameStatus> {
        self.current.as_ref().map(GameState::status)
    }

    /// 1-based number of the current (or last) round; 0 before the first.
    pub fn round(&self) -> u64 {
        self.dealer.rounds_dealt()
    }

    pub fn view(&self) -> Option<GameViewModel> {
        self.current
            .as_ref()
            .map(|state| GameViewModel::from_state(state, self.round()))
    }

    pub fn feedback(&self, input: &str) -> InputFeedback {
        match &self.current {
            Some(state) => InputFeedback::evaluate(state, input),
            None => InputFeedback::Empty,
        }
    }

    pub fn dealer(&self) -> &RoundDealer {
        &self.dealer
    }
}

fn log_rejection(round: u64, input: &str, error: &GuessError) {
    use game_core::GameError;

    if error.severity().is_internal() {
        tracing::error!(round, input, code = error.error_code(), "Guess rejected: {}", error);
    } else {
        tracing::warn!(round, input, code = error.error_code(), "Guess rejected: {}", error);
    }
}
