//! Core domain types for the puzzle
//!
//! Words over the Spanish alphabet and the pure scoring function.
//! Nothing here holds game state.

mod feedback;
mod word;

pub use feedback::{Feedback, TileResult};
pub use word::{ALPHABET, WORD_LENGTH, Word, WordError, is_letter};

/// Number of boards played simultaneously
pub const NUM_BOARDS: usize = 4;
