//! Cross-frontend primitives for presenting the game.
//!
//! Houses the round dealer and session controller, message logging, event
//! handling, and view-model types that both the terminal and any future
//! graphical client can reuse.
pub mod config;
pub mod dealer;
pub mod event;
pub mod frontend;
pub mod message;
pub mod session;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig, RoundConfig};
pub use dealer::RoundDealer;
pub use event::{EventConsumer, EventImpact, MessageConsumer, RoundEvent};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use session::GameSession;
pub use view_model::{GameViewModel, InputFeedback, PresentationMapper};
