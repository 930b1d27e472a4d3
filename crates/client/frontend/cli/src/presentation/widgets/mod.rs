//! Widgets composing the start, game, and result screens.
pub mod end_screen;
pub mod footer;
pub mod gallows;
pub mod guess_word;
pub mod header;
pub mod letter_input;
pub mod messages;
pub mod start_screen;
pub mod used_letters;
