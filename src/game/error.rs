//! Errors surfaced by guess submission

use thiserror::Error;

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Wrong number of letters; the player keeps typing
    #[error("guess needs {expected} letters, got {actual}")]
    IncompleteGuess { expected: usize, actual: usize },
    /// Not in the dictionary
    #[error("{0} is not in the word list")]
    InvalidWord(String),
    /// The session already ended; nothing changes
    #[error("the game is already over")]
    GameOver,
}
