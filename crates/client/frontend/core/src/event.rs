//! Round events and utilities for reacting to them inside UI layers.
use game_core::{GameStatus, GuessError, GuessOutcome};

use crate::message::{MessageEntry, MessageLevel, MessageLog};

/// Something that happened during a session, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundEvent {
    /// A new round began with a word of `length` characters.
    Started { round: u64, length: usize },
    /// A guess was applied.
    Guessed {
        round: u64,
        outcome: GuessOutcome,
        remaining: u8,
    },
    /// Input was refused; the round state did not change.
    Rejected {
        round: u64,
        input: String,
        error: GuessError,
    },
    /// The round reached a final status.
    Ended {
        round: u64,
        status: GameStatus,
        word: String,
    },
    /// The player left an unfinished round.
    Abandoned { round: u64, word: String },
}

impl RoundEvent {
    pub const fn round(&self) -> u64 {
        match self {
            Self::Started { round, .. }
            | Self::Guessed { round, .. }
            | Self::Rejected { round, .. }
            | Self::Ended { round, .. }
            | Self::Abandoned { round, .. } => *round,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EventImpact {
    pub requires_redraw: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &RoundEvent) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;
}

/// Turns round events into player-facing messages.
#[derive(Clone, Debug)]
pub struct MessageConsumer {
    log: MessageLog,
}

impl MessageConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self { log }
    }

    fn describe(event: &RoundEvent) -> (String, MessageLevel) {
        match event {
            RoundEvent::Started { length, .. } => (
                format!("New word: {length} characters. Good luck!"),
                MessageLevel::Info,
            ),
            RoundEvent::Guessed {
                outcome: GuessOutcome::Hit { letter, revealed },
                ..
            } => {
                let noun = if *revealed == 1 { "spot" } else { "spots" };
                (
                    format!("{letter} is in the word ({revealed} {noun})."),
                    MessageLevel::Success,
                )
            }
            RoundEvent::Guessed {
                outcome: GuessOutcome::Miss { letter, .. },
                remaining,
                ..
            } => (
                format!("No {letter}. {remaining} mistakes left."),
                MessageLevel::Warning,
            ),
            RoundEvent::Rejected { error, .. } => (error.to_string(), MessageLevel::Error),
            RoundEvent::Ended {
                status: GameStatus::Won,
                word,
                ..
            } => (format!("You won! The word was {word}."), MessageLevel::Success),
            RoundEvent::Ended { word, .. } => (
                format!("You lost! The word was {word}."),
                MessageLevel::Error,
            ),
            RoundEvent::Abandoned { word, .. } => (
                format!("Round abandoned. The word was {word}."),
                MessageLevel::Info,
            ),
        }
    }
}

impl EventConsumer for MessageConsumer {
    fn on_event(&mut self, event: &RoundEvent) -> EventImpact {
        let (text, level) = Self::describe(event);
        self.log
            .push(MessageEntry::new(text, Some(event.round()), level));
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GallowsStage, Letter};

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn last_text(consumer: &MessageConsumer) -> String {
        consumer.message_log().recent(1).next().unwrap().text.clone()
    }

    #[test]
    fn formats_guesses() {
        let mut consumer = MessageConsumer::new(MessageLog::new(8));

        consumer.on_event(&RoundEvent::Guessed {
            round: 1,
            outcome: GuessOutcome::Hit {
                letter: letter('A'),
                revealed: 2,
            },
            remaining: 9,
        });
        assert_eq!(last_text(&consumer), "A is in the word (2 spots).");

        consumer.on_event(&RoundEvent::Guessed {
            round: 1,
            outcome: GuessOutcome::Miss {
                letter: letter('Z'),
                stage: GallowsStage::from_failures(1),
            },
            remaining: 8,
        });
        assert_eq!(last_text(&consumer), "No Z. 8 mistakes left.");
    }

    #[test]
    fn formats_round_end() {
        let mut consumer = MessageConsumer::new(MessageLog::new(8));
        let impact = consumer.on_event(&RoundEvent::Ended {
            round: 3,
            status: GameStatus::Lost,
            word: "CAT".to_string(),
        });

        assert!(impact.requires_redraw);
        let entry = consumer.message_log().recent(1).next().unwrap();
        assert_eq!(entry.text, "You lost! The word was CAT.");
        assert_eq!(entry.round, Some(3));
        assert_eq!(entry.level, MessageLevel::Error);
    }
}
