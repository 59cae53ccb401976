//! Guess scoring and per-tile feedback
//!
//! A guess scored against one board's target yields one `TileResult` per position:
//! - Correct: letter in the right position
//! - Present: letter elsewhere in the target
//! - Absent: no unconsumed occurrence left in the target

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Correctness of a single letter against a single target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileResult {
    Correct,
    Present,
    Absent,
}

impl TileResult {
    /// Glyph used in the shareable summary
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '■',
            Self::Present => '▪',
            Self::Absent => '□',
        }
    }
}

/// Feedback for one guess on one board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([TileResult; WORD_LENGTH]);

impl Feedback {
    /// All tiles correct
    pub const PERFECT: Self = Self([TileResult::Correct; WORD_LENGTH]);

    /// Build feedback from explicit tiles
    #[must_use]
    pub const fn new(tiles: [TileResult; WORD_LENGTH]) -> Self {
        Self(tiles)
    }

    /// Score `guess` against `target`
    ///
    /// Each target letter is consumed at most once, so duplicates in the guess
    /// never earn more marks than the target holds.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark remaining letters present while the pool still holds them
    ///
    /// # Examples
    /// ```
    /// use cuordle::core::{Feedback, TileResult::*, Word};
    ///
    /// let guess = Word::new("llama").unwrap();
    /// let target = Word::new("mamas").unwrap();
    ///
    /// assert_eq!(
    ///     Feedback::calculate(&guess, &target).tiles(),
    ///     &[Absent, Absent, Present, Present, Present]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut tiles = [TileResult::Absent; WORD_LENGTH];
        let mut available = target.letter_counts();

        // First pass: exact position matches
        for (i, tile) in tiles.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == target.letter_at(i) {
                *tile = TileResult::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an occurrence is still unconsumed
        for (i, tile) in tiles.iter_mut().enumerate() {
            if *tile == TileResult::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                *tile = TileResult::Present;
                *count -= 1;
            }
        }

        Self(tiles)
    }

    /// Tiles in position order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[TileResult; WORD_LENGTH] {
        &self.0
    }

    /// Check if every tile is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count tiles with the given result
    #[must_use]
    pub fn count(&self, result: TileResult) -> usize {
        self.0.iter().filter(|&&t| t == result).count()
    }

    /// Render as share glyphs, e.g. `"■□▪□□"`
    #[must_use]
    pub fn to_glyphs(&self) -> String {
        self.0.iter().map(|t| t.glyph()).collect()
    }

    /// Parse feedback from a string like `"GY-G-"` or `"■▪□■□"`
    ///
    /// Accepts:
    /// - 'G'/'g'/■ for correct
    /// - 'Y'/'y'/▪ for present
    /// - '-'/'_'/□ for absent
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API; FromStr is implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut tiles = [TileResult::Absent; WORD_LENGTH];
        for (tile, ch) in tiles.iter_mut().zip(chars) {
            *tile = match ch {
                'G' | 'g' | '■' => TileResult::Correct,
                'Y' | 'y' | '▪' => TileResult::Present,
                '-' | '_' | '□' => TileResult::Absent,
                _ => return None,
            };
        }

        Some(Self(tiles))
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_glyphs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count(TileResult::Correct), 5);
        assert_eq!(Feedback::PERFECT.to_glyphs(), "■■■■■");
    }

    #[test]
    fn feedback_symmetry() {
        for word in ["salas", "morir", "muros", "pulir", "otoño", "aaaaa"] {
            assert_eq!(score(word, word), Feedback::PERFECT);
        }
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = score("pulir", "gatos");
        assert_eq!(feedback, Feedback::from_str("-----").unwrap());
        assert_eq!(feedback.count(TileResult::Absent), 5);
    }

    #[test]
    fn feedback_duplicate_letters_not_overcounted() {
        // LLAMA vs MAMAS: two A's and one M available after no exact matches
        let feedback = score("llama", "mamas");
        assert_eq!(feedback, Feedback::from_str("--YYY").unwrap());

        let guess = Word::new("llama").unwrap();
        let target = Word::new("mamas").unwrap();
        for letter in ['L', 'A', 'M'] {
            let marked = (0..WORD_LENGTH)
                .filter(|&i| guess.letter_at(i) == letter)
                .filter(|&i| feedback.tiles()[i] != TileResult::Absent)
                .count();
            let in_target = target.letters().iter().filter(|&&c| c == letter).count();
            assert!(marked <= in_target, "{letter} marked {marked} times");
        }
    }

    #[test]
    fn feedback_correct_consumes_before_present() {
        // SALAS vs MUROS: final S is exact, first S finds nothing left
        assert_eq!(score("salas", "muros"), Feedback::from_str("----G").unwrap());
    }

    #[test]
    fn feedback_present_consumes_leftmost_first() {
        // One A in the target: the first A takes it
        assert_eq!(score("aabbb", "xxxxa"), Feedback::from_str("Y----").unwrap());
    }

    #[test]
    fn feedback_enye_is_its_own_letter() {
        assert_eq!(score("otoño", "otono"), Feedback::from_str("GGG-G").unwrap());
        assert_eq!(score("señal", "dueño"), Feedback::from_str("-YY--").unwrap());
    }

    #[test]
    fn feedback_from_str_variants() {
        let a = Feedback::from_str("GY-G_").unwrap();
        let b = Feedback::from_str("■▪□■□").unwrap();
        let c = Feedback::from_str("gy-g-").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.count(TileResult::Correct), 2);
        assert_eq!(a.count(TileResult::Present), 1);
    }

    #[test]
    fn feedback_from_str_invalid() {
        assert!(Feedback::from_str("GYG").is_none());
        assert!(Feedback::from_str("GYGGYG").is_none());
        assert!(Feedback::from_str("GXGGY").is_none());
        assert!("".parse::<Feedback>().is_err());
    }

    #[test]
    fn feedback_display_uses_glyphs() {
        assert_eq!(format!("{}", score("salas", "pulir")), "□□■□□");
    }
}
