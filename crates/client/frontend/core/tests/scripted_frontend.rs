use anyhow::Result;
use async_trait::async_trait;
use client_frontend_core::{
    EventConsumer, Frontend, GameSession, MessageConsumer, MessageLog, RoundDealer, RoundEvent,
};
use game_content::WordListLoader;
use game_core::{GameConfig, GameStatus};

/// Plays a fixed number of rounds by guessing the alphabet in frequency order.
struct ScriptedFrontend {
    rounds: usize,
    results: Vec<GameStatus>,
    consumer: MessageConsumer,
}

#[async_trait]
impl Frontend for ScriptedFrontend {
    async fn run(&mut self, dealer: RoundDealer) -> Result<()> {
        let mut session = GameSession::new(dealer);

        for _ in 0..self.rounds {
            let started = session.start_round();
            self.consumer.on_event(&started);

            'round: for letter in "ETAOINSHRDLUCMFWYPVBGKJQXZ".chars() {
                for event in session.submit(&letter.to_string()) {
                    self.consumer.on_event(&event);
                    if let RoundEvent::Ended { status, .. } = event {
                        self.results.push(status);
                        break 'round;
                    }
                }
            }
        }

        Ok(())
    }
}

#[tokio::test]
async fn every_round_ends_in_win_or_loss() {
    let config = GameConfig::default();
    let words = WordListLoader::builtin(&config).unwrap();
    let dealer = RoundDealer::new(words, config, 2024);

    let mut frontend = ScriptedFrontend {
        rounds: 5,
        results: Vec::new(),
        consumer: MessageConsumer::new(MessageLog::new(256)),
    };
    frontend.run(dealer).await.unwrap();

    assert_eq!(frontend.results.len(), 5);
    assert!(frontend.results.iter().all(GameStatus::is_finished));

    let log = frontend.consumer.take_message_log();
    let finals = log
        .iter()
        .filter(|entry| entry.text.contains("The word was"))
        .count();
    assert_eq!(finals, 5);
}
