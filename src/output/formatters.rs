//! Formatting utilities for terminal output

use crate::core::{Feedback, TileResult, WORD_LENGTH, Word};
use crate::game::{GameError, LetterSlots, LetterState};
use colored::{ColoredString, Colorize};

/// Keyboard layout, top row first
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKLÑ", "ZXCVBNM"];

/// Short message shown to the player for a rejected guess
#[must_use]
pub fn error_message(error: &GameError) -> String {
    match error {
        GameError::IncompleteGuess { .. } => "¡Faltan letras!".to_string(),
        GameError::InvalidWord(word) => format!("Palabra no válida: {word}"),
        GameError::GameOver => "La partida ha terminado".to_string(),
    }
}

/// Color a single tile
#[must_use]
pub fn colored_tile(letter: char, result: TileResult) -> ColoredString {
    let tile = format!(" {letter} ");
    match result {
        TileResult::Correct => tile.black().on_green().bold(),
        TileResult::Present => tile.black().on_yellow().bold(),
        TileResult::Absent => tile.white().on_bright_black(),
    }
}

/// A guess colored by its feedback on one board
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.tiles())
        .map(|(&letter, &result)| colored_tile(letter, result).to_string())
        .collect()
}

/// Blank cell used for boards that sat out a turn
#[must_use]
pub fn blank_guess() -> String {
    "   ".repeat(WORD_LENGTH)
}

/// One marker per board, colored by what that board knows about a letter
#[must_use]
pub fn slot_markers(slots: &LetterSlots) -> String {
    slots
        .iter()
        .map(|state| match state {
            LetterState::Correct => "▪".green().to_string(),
            LetterState::Present => "▪".yellow().to_string(),
            LetterState::Absent => "▪".bright_black().to_string(),
            LetterState::Unset => "·".white().to_string(),
        })
        .collect()
}

/// A keyboard key: the letter followed by its per-board markers
#[must_use]
pub fn keyboard_key(letter: char, slots: &LetterSlots, dimmed: bool) -> String {
    let label = if dimmed {
        letter.to_string().bright_black().strikethrough()
    } else {
        letter.to_string().bold()
    };
    format!("{label}{}", slot_markers(slots))
}
