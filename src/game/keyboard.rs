//! Shared keyboard overlay
//!
//! One keyboard serves every board, so each letter carries one slot per board.
//! Slots only ever move up: Unset < Absent < Present < Correct.

use crate::core::{NUM_BOARDS, TileResult};
use rustc_hash::FxHashMap;

/// What one board has revealed about one letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    #[default]
    Unset,
    Absent,
    Present,
    Correct,
}

impl From<TileResult> for LetterState {
    fn from(result: TileResult) -> Self {
        match result {
            TileResult::Correct => Self::Correct,
            TileResult::Present => Self::Present,
            TileResult::Absent => Self::Absent,
        }
    }
}

/// Per-board states of a single letter
pub type LetterSlots = [LetterState; NUM_BOARDS];

const UNSET_SLOTS: LetterSlots = [LetterState::Unset; NUM_BOARDS];

/// Keyboard state for all letters guessed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<char, LetterSlots>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tile result for `letter` on `board`
    ///
    /// Returns true if the slot was raised. Lower or equal results are ignored.
    ///
    /// # Panics
    /// Panics if `board >= NUM_BOARDS`
    pub fn record(&mut self, letter: char, board: usize, result: TileResult) -> bool {
        let slot = &mut self.letters.entry(letter).or_insert(UNSET_SLOTS)[board];
        let next = LetterState::from(result);
        if next > *slot {
            *slot = next;
            true
        } else {
            false
        }
    }

    /// State of `letter` on `board`
    #[must_use]
    pub fn get(&self, letter: char, board: usize) -> LetterState {
        self.slots(letter)[board]
    }

    /// All board slots for `letter` (all Unset if never guessed)
    #[must_use]
    pub fn slots(&self, letter: char) -> LetterSlots {
        self.letters.get(&letter).copied().unwrap_or(UNSET_SLOTS)
    }

    /// Whether `letter` has appeared in any guess
    #[must_use]
    pub fn is_tracked(&self, letter: char) -> bool {
        self.letters.contains_key(&letter)
    }

    /// Tracked letters with their slots, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (char, &LetterSlots)> {
        self.letters.iter().map(|(&c, slots)| (c, slots))
    }
}
