//! Board state tracking
//!
//! Owns the boards, the keyboard overlay and the disabled-letter set, and
//! folds each scored guess into them.

use super::keyboard::{KeyboardState, LetterState};
use crate::core::{Feedback, NUM_BOARDS, Word};
use crate::wordlists::Targets;
use std::collections::BTreeSet;

/// One target word and when (if ever) it was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    target: Word,
    solved_at: Option<usize>,
}

impl Board {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self {
            target,
            solved_at: None,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// 1-based turn on which the board was solved
    #[must_use]
    pub const fn solved_at(&self) -> Option<usize> {
        self.solved_at
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved_at.is_some()
    }

    fn mark_solved(&mut self, turn: usize) {
        if self.solved_at.is_none() {
            self.solved_at = Some(turn);
        }
    }
}

/// Aggregated state of all boards in a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTracker {
    boards: [Board; NUM_BOARDS],
    keyboard: KeyboardState,
    disabled: BTreeSet<char>,
}

impl BoardTracker {
    #[must_use]
    pub fn new(targets: Targets) -> Self {
        Self {
            boards: targets.map(Board::new),
            keyboard: KeyboardState::new(),
            disabled: BTreeSet::new(),
        }
    }

    /// Score `guess` on one board and fold the result into the keyboard
    ///
    /// Returns `None` without touching anything if the board is already solved
    /// (or does not exist).
    pub fn apply_guess(&mut self, board: usize, guess: &Word, turn: usize) -> Option<Feedback> {
        let entry = self.boards.get_mut(board)?;
        if entry.is_solved() {
            return None;
        }

        let feedback = Feedback::calculate(guess, &entry.target);
        for (&letter, &result) in guess.letters().iter().zip(feedback.tiles()) {
            self.keyboard.record(letter, board, result);
        }

        if guess == &entry.target {
            entry.mark_solved(turn);
        }

        Some(feedback)
    }

    /// Disable every guess letter that no unsolved target contains
    ///
    /// Returns the letters disabled by this call, in guess order.
    pub fn recompute_disabled_letters(&mut self, guess: &Word) -> Vec<char> {
        let mut newly = Vec::new();
        for letter in guess.distinct_letters() {
            let still_needed = self
                .boards
                .iter()
                .any(|b| !b.is_solved() && b.target.has_letter(letter));
            if !still_needed && self.disabled.insert(letter) {
                newly.push(letter);
            }
        }
        newly
    }

    /// A letter is exhausted once every board is solved or has ruled it out
    ///
    /// Letters that were never guessed are not exhausted.
    #[must_use]
    pub fn is_letter_exhausted(&self, letter: char) -> bool {
        if !self.keyboard.is_tracked(letter) {
            return false;
        }
        let slots = self.keyboard.slots(letter);
        self.boards
            .iter()
            .zip(slots)
            .all(|(board, state)| board.is_solved() || state == LetterState::Absent)
    }

    #[must_use]
    pub fn is_disabled(&self, letter: char) -> bool {
        self.disabled.contains(&letter)
    }

    #[must_use]
    pub fn all_solved(&self) -> bool {
        self.boards.iter().all(Board::is_solved)
    }

    #[must_use]
    pub const fn boards(&self) -> &[Board; NUM_BOARDS] {
        &self.boards
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn disabled_letters(&self) -> &BTreeSet<char> {
        &self.disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileResult;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn tracker(targets: [&str; NUM_BOARDS]) -> BoardTracker {
        BoardTracker::new(targets.map(word))
    }

    #[test]
    fn solving_guess_marks_board() {
        let mut t = tracker(["salas", "morir", "muros", "pulir"]);
        let feedback = t.apply_guess(0, &word("salas"), 1).unwrap();

        assert!(feedback.is_perfect());
        assert!(t.boards()[0].is_solved());
        assert_eq!(t.boards()[0].solved_at(), Some(1));
        assert!(!t.boards()[1].is_solved());
    }

    #[test]
    fn solved_board_is_untouched() {
        let mut t = tracker(["salas", "morir", "muros", "pulir"]);
        t.apply_guess(0, &word("salas"), 1);
        let before = t.clone();

        assert_eq!(t.apply_guess(0, &word("salas"), 2), None);
        assert_eq!(t.apply_guess(0, &word("morir"), 3), None);
        assert_eq!(t, before);
        assert_eq!(t.boards()[0].solved_at(), Some(1));
    }

    #[test]
    fn out_of_range_board_is_ignored() {
        let mut t = tracker(["salas", "morir", "muros", "pulir"]);
        assert_eq!(t.apply_guess(NUM_BOARDS, &word("salas"), 1), None);
    }

    #[test]
    fn keyboard_takes_best_result_for_repeated_letters() {
        // SALAS vs MUROS: first S absent, last S correct
        let mut t = tracker(["salas", "morir", "muros", "pulir"]);
        let feedback = t.apply_guess(2, &word("salas"), 1).unwrap();
        assert_eq!(feedback.tiles()[0], TileResult::Absent);
        assert_eq!(t.keyboard().get('S', 2), LetterState::Correct);
    }

    #[test]
    fn keyboard_never_downgrades() {
        let mut t = tracker(["salas", "morir", "muros", "pulir"]);
        t.apply_guess(1, &word("motor"), 1);
        assert_eq!(t.keyboard().get('O', 1), LetterState::Correct);

        let feedback = t.apply_guess(1, &word("oliva"), 2).unwrap();
        assert_eq!(feedback.tiles()[0], TileResult::Present);
        assert_eq!(t.keyboard().get('O', 1), LetterState::Correct);
    }

    #[test]
    fn disabled_letters_only_count_unsolved_targets() {
        let mut t = tracker(["salas", "morir", "muros", "pulir"]);
        t.apply_guess(0, &word("salas"), 1);
        let newly = t.recompute_disabled_letters(&word("salas"));

        // S lives on in MUROS, L in PULIR; A is gone once SALAS is solved
        assert_eq!(newly, vec!['A']);
        assert!(t.is_disabled('A'));
        assert!(!t.is_disabled('S'));
        assert!(!t.is_disabled('L'));
    }

    #[test]
    fn recompute_disabled_is_idempotent() {
        let mut t = tracker(["salas", "morir", "muros", "pulir"]);
        let guess = word("gatos");
        let first = t.recompute_disabled_letters(&guess);
        let second = t.recompute_disabled_letters(&guess);

        // A, O and S are still in unsolved targets
        assert_eq!(first, vec!['G', 'T']);
        assert!(second.is_empty());
        assert_eq!(t.disabled_letters().len(), 2);
    }

    #[test]
    fn exhaustion_requires_absent_or_solved_everywhere() {
        let mut t = tracker(["salas", "morir", "muros", "pulir"]);
        for b in 0..NUM_BOARDS {
            t.apply_guess(b, &word("salas"), 1);
        }

        // A: solved on 0, absent on 1..3
        assert!(t.is_letter_exhausted('A'));
        // L: present on board 3
        assert!(!t.is_letter_exhausted('L'));
        // S: correct on board 2
        assert!(!t.is_letter_exhausted('S'));
    }

    #[test]
    fn never_guessed_letter_is_not_exhausted() {
        let t = tracker(["salas", "morir", "muros", "pulir"]);
        assert!(!t.is_letter_exhausted('Z'));
    }

    #[test]
    fn unset_slot_on_unsolved_board_blocks_exhaustion() {
        let mut t = tracker(["salas", "morir", "muros", "pulir"]);
        // Only board 1 sees the guess; boards 2 and 3 stay Unset for G
        t.apply_guess(1, &word("grano"), 1);
        assert_eq!(t.keyboard().get('G', 1), LetterState::Absent);
        assert!(!t.is_letter_exhausted('G'));
    }

    #[test]
    fn all_solved_after_every_target() {
        let mut t = tracker(["salas", "morir", "muros", "pulir"]);
        for (turn, guess) in ["salas", "morir", "muros", "pulir"].iter().enumerate() {
            assert!(!t.all_solved());
            for b in 0..NUM_BOARDS {
                t.apply_guess(b, &word(guess), turn + 1);
            }
        }
        assert!(t.all_solved());
        let turns: Vec<_> = t.boards().iter().map(Board::solved_at).collect();
        assert_eq!(turns, vec![Some(1), Some(2), Some(3), Some(4)]);
    }
}
