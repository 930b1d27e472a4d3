//! User-facing labels.
pub const TITLE: &str = "HANGMAN";
pub const SUBTITLE: &str = "Guess the word before the gallows is complete";
pub const START_TEXT: &str = "Let's start!";
pub const ENTER_LETTER: &str = "Enter a letter";
pub const CHECK: &str = "Check";
pub const USED_LETTERS: &str = "Used letters";
pub const INVALID_INPUT: &str = "Invalid input";
pub const MESSAGES: &str = "Messages";

pub fn char_limit(len: usize) -> String {
    format!("Char limit is 1 ({len})")
}

pub fn won_text(word: &str) -> String {
    format!("You won! The word was {word}")
}

pub fn lost_text(word: &str) -> String {
    format!("You lost! The word was {word}")
}

pub fn round_header(round: u64, failures: u8, max_failures: u8) -> String {
    format!("Round {round} | Mistakes {failures}/{max_failures}")
}
