//! Game controller
//!
//! A `GameSession` is the single owner of all mutable game state. It changes
//! only through `submit_guess` and `handle_input`, and freezes once the game
//! is won or lost.

use super::board::{Board, BoardTracker};
use super::config::GameConfig;
use super::error::GameError;
use super::keyboard::KeyboardState;
use crate::core::{Feedback, NUM_BOARDS, WORD_LENGTH, Word, is_letter};
use crate::wordlists::{Dictionary, Targets};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost are terminal
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A raw key from the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Delete,
    Enter,
}

/// Per-board results of one guess, one row across all boards
pub type TurnRow = [Option<Feedback>; NUM_BOARDS];

/// Outcome of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// 1-based turn the guess was played on
    pub turn: usize,
    pub guess: Word,
    /// `None` for boards that were already solved before this guess
    pub feedback: TurnRow,
    pub newly_disabled: Vec<char>,
    pub status: GameStatus,
}

/// State of one day's game
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    config: GameConfig,
    tracker: BoardTracker,
    guesses: Vec<Word>,
    status: GameStatus,
    buffer: String,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub fn new(targets: Targets, dictionary: &'a Dictionary, config: GameConfig) -> Self {
        Self {
            dictionary,
            config,
            tracker: BoardTracker::new(targets),
            guesses: Vec::new(),
            status: GameStatus::InProgress,
            buffer: String::new(),
        }
    }

    /// Submit a complete guess
    ///
    /// Every unsolved board is scored, the disabled letters are recomputed, the
    /// turn advances and the status is re-evaluated.
    ///
    /// # Errors
    ///
    /// Nothing changes when an error is returned:
    /// - `GameError::GameOver` if the session is already won or lost
    /// - `GameError::IncompleteGuess` if `raw` is not `WORD_LENGTH` letters long
    /// - `GameError::InvalidWord` if `raw` is not in the dictionary
    pub fn submit_guess(&mut self, raw: &str) -> Result<Submission, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let actual = raw.chars().count();
        if actual != WORD_LENGTH {
            return Err(GameError::IncompleteGuess {
                expected: WORD_LENGTH,
                actual,
            });
        }

        if !self.dictionary.is_valid(raw) {
            return Err(GameError::InvalidWord(raw.to_uppercase()));
        }
        let guess = Word::new(raw).map_err(|_| GameError::InvalidWord(raw.to_uppercase()))?;

        let turn = self.guesses.len() + 1;
        let feedback: TurnRow =
            std::array::from_fn(|board| self.tracker.apply_guess(board, &guess, turn));
        let newly_disabled = self.tracker.recompute_disabled_letters(&guess);
        self.guesses.push(guess.clone());

        self.status = if self.tracker.all_solved() {
            GameStatus::Won
        } else if self.guesses.len() >= self.config.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        tracing::debug!(turn, guess = %guess, status = ?self.status, "guess accepted");
        if self.status.is_over() {
            tracing::info!(turns = turn, status = ?self.status, "game finished");
        }

        Ok(Submission {
            turn,
            guess,
            feedback,
            newly_disabled,
            status: self.status,
        })
    }

    /// Apply one key press to the in-progress guess
    ///
    /// Letters are uppercased and only appended if they are playable, not
    /// disabled, and the guess is not yet full. `Enter` submits the buffer and
    /// clears it on success. Every event is ignored once the game is over.
    ///
    /// # Errors
    ///
    /// Propagates `submit_guess` errors on `Enter`; the buffer is kept.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<Option<Submission>, GameError> {
        if self.status.is_over() {
            return Ok(None);
        }

        match event {
            InputEvent::Delete => {
                self.buffer.pop();
                Ok(None)
            }
            InputEvent::Letter(c) => {
                let mut upper = c.to_uppercase();
                if let (Some(letter), None) = (upper.next(), upper.next())
                    && is_letter(letter)
                    && !self.tracker.is_disabled(letter)
                    && self.buffer.chars().count() < WORD_LENGTH
                {
                    self.buffer.push(letter);
                }
                Ok(None)
            }
            InputEvent::Enter => {
                let raw = self.buffer.clone();
                let submission = self.submit_guess(&raw)?;
                self.buffer.clear();
                Ok(Some(submission))
            }
        }
    }

    /// Feedback for every played turn, recomputed from the guess history
    ///
    /// A board reports `None` for turns after the one that solved it.
    #[must_use]
    pub fn history(&self) -> Vec<TurnRow> {
        self.guesses
            .iter()
            .enumerate()
            .map(|(i, guess)| {
                let turn = i + 1;
                std::array::from_fn(|b| {
                    let board = &self.tracker.boards()[b];
                    match board.solved_at() {
                        Some(solved) if turn > solved => None,
                        _ => Some(Feedback::calculate(guess, board.target())),
                    }
                })
            })
            .collect()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Number of guesses played so far
    #[must_use]
    pub fn current_turn(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn tracker(&self) -> &BoardTracker {
        &self.tracker
    }

    #[must_use]
    pub const fn boards(&self) -> &[Board; NUM_BOARDS] {
        self.tracker.boards()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        self.tracker.keyboard()
    }

    #[must_use]
    pub fn is_letter_exhausted(&self, letter: char) -> bool {
        self.tracker.is_letter_exhausted(letter)
    }

    #[must_use]
    pub fn is_disabled(&self, letter: char) -> bool {
        self.tracker.is_disabled(letter)
    }
}
