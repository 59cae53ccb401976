//! Puzzle word representation
//!
//! A Word stores a five-letter word over the Spanish alphabet (A-Z plus Ñ),
//! normalized to uppercase for gameplay comparisons.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// Playable letters, in keyboard-independent alphabetical order
pub const ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Check whether an (uppercase) character belongs to the alphabet
#[inline]
#[must_use]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_uppercase() || c == 'Ñ'
}

/// A five-letter puzzle word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [char; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("word contains a character outside the alphabet: {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and uppercased, so `" salas"` and `"SALAS"` are the same word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly five letters
    /// - Contains characters outside A-Z and Ñ
    ///
    /// # Examples
    /// ```
    /// use cuordle::core::Word;
    ///
    /// let word = Word::new("sueño").unwrap();
    /// assert_eq!(word.text(), "SUEÑO");
    ///
    /// assert!(Word::new("larguisimo").is_err());
    /// assert!(Word::new("p4ra!").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text: String = text.as_ref().trim().to_uppercase();
        let letters: Vec<char> = text.chars().collect();

        if letters.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(letters.len()));
        }

        if let Some(&bad) = letters.iter().find(|&&c| !is_letter(c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters: [char; WORD_LENGTH] = letters
            .try_into()
            .map_err(|v: Vec<char>| WordError::InvalidLength(v.len()))?;

        Ok(Self { text, letters })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word in the lowercase form used by the dictionary
    #[must_use]
    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= `WORD_LENGTH`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Distinct letters, in order of first appearance
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<char> {
        let mut seen = Vec::with_capacity(WORD_LENGTH);
        for &c in &self.letters {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        seen
    }

    /// Get the count of each letter in the word
    ///
    /// Used for scoring with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &c in &self.letters {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("SALAS").unwrap();
        assert_eq!(word.text(), "SALAS");
        assert_eq!(word.letters(), &['S', 'A', 'L', 'A', 'S']);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("salas").unwrap().text(), "SALAS");
        assert_eq!(Word::new("  MoRiR \n").unwrap().text(), "MORIR");
    }

    #[test]
    fn word_creation_accepts_enye() {
        let word = Word::new("otoño").unwrap();
        assert_eq!(word.text(), "OTOÑO");
        assert_eq!(word.letter_at(3), 'Ñ');
        assert_eq!(word.lowercase(), "otoño");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("larguisimo"), Err(WordError::InvalidLength(10)));
        assert_eq!(Word::new("sol"), Err(WordError::InvalidLength(3)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_length_counts_letters_not_bytes() {
        // Ñ is two bytes in UTF-8
        assert!(Word::new("ñañañ").is_ok());
        assert_eq!(Word::new("ñaña"), Err(WordError::InvalidLength(4)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("sal4s"), Err(WordError::InvalidCharacter('4')));
        assert_eq!(Word::new("sa as"), Err(WordError::InvalidCharacter(' ')));
        assert_eq!(Word::new("árbol"), Err(WordError::InvalidCharacter('Á')));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("pulir").unwrap();
        assert!(word.has_letter('P'));
        assert!(word.has_letter('R'));
        assert!(!word.has_letter('S'));
        assert!(!word.has_letter('p'));
    }

    #[test]
    fn word_distinct_letters_keeps_first_appearance() {
        let word = Word::new("salas").unwrap();
        assert_eq!(word.distinct_letters(), vec!['S', 'A', 'L']);
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("mamas").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'M'), Some(&2));
        assert_eq!(counts.get(&'A'), Some(&2));
        assert_eq!(counts.get(&'S'), Some(&1));
        assert_eq!(counts.get(&'Z'), None);
    }

    #[test]
    fn word_display() {
        let word = Word::new("muros").unwrap();
        assert_eq!(format!("{word}"), "MUROS");
    }

    #[test]
    fn alphabet_is_all_letters() {
        assert_eq!(ALPHABET.len(), 27);
        assert!(ALPHABET.iter().all(|&c| is_letter(c)));
        assert!(!is_letter('a'));
    }
}
