//! Picks the mystery word for each round of a session.
use game_content::WordList;
use game_core::{GameConfig, GameState, MysteryWord, PcgRng, RngOracle, compute_seed};

/// Draws per round before accepting a repeat of the previous word.
const MAX_REDRAWS: u32 = 4;

/// Session-scoped source of new rounds.
///
/// Word choice is a pure function of the session seed and round number, so
/// a session replayed with the same seed deals the same words.
pub struct RoundDealer {
    words: WordList,
    config: GameConfig,
    rng: Box<dyn RngOracle>,
    seed: u64,
    round: u64,
    last_word: Option<MysteryWord>,
}

impl RoundDealer {
    pub fn new(words: WordList, config: GameConfig, seed: u64) -> Self {
        Self::with_rng(words, config, seed, PcgRng)
    }

    pub fn with_rng<R>(words: WordList, config: GameConfig, seed: u64, rng: R) -> Self
    where
        R: RngOracle + 'static,
    {
        Self {
            words,
            config,
            rng: Box::new(rng),
            seed,
            round: 0,
            last_word: None,
        }
    }

    /// Starts the next round.
    ///
    /// Avoids dealing the same word twice in a row when the list allows it.
    pub fn deal(&mut self) -> GameState {
        let mut word = self.draw(0);
        for context in 1..=MAX_REDRAWS {
            if self.words.len() < 2 || self.last_word.as_ref() != Some(&word) {
                break;
            }
            word = self.draw(context);
        }

        tracing::debug!(round = self.round, letters = word.len(), "Dealt mystery word");
        self.round += 1;
        self.last_word = Some(word.clone());
        GameState::from_word(word, &self.config)
    }

    fn draw(&self, context: u32) -> MysteryWord {
        let seed = compute_seed(self.seed, self.round, context);
        self.words.pick(self.rng.as_ref(), seed).clone()
    }

    /// Number of rounds dealt so far.
    pub fn rounds_dealt(&self) -> u64 {
        self.round
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }
}

impl std::fmt::Debug for RoundDealer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundDealer")
            .field("words", &self.words.len())
            .field("seed", &self.seed)
            .field("round", &self.round)
            .finish()
    }
}
