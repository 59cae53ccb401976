//! Game engine
//!
//! Board state tracking, the shared keyboard overlay and the session
//! controller that ties them together.

mod board;
mod config;
mod error;
mod keyboard;
mod session;
mod share;

pub use board::{Board, BoardTracker};
pub use config::{GameConfig, MAX_GUESSES, SHARE_LINK};
pub use error::GameError;
pub use keyboard::{KeyboardState, LetterSlots, LetterState};
pub use session::{GameSession, GameStatus, InputEvent, Submission, TurnRow};
