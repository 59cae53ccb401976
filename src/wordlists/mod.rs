//! Word source and dictionary
//!
//! Resolves the day's targets from the puzzle pool and validates guesses
//! against the accepted-word list.

mod daily;
mod dictionary;
mod embedded;
pub mod loader;
mod pool;

pub use daily::{day_index, today};
pub use dictionary::Dictionary;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, POOL_JSON};
pub use pool::{Targets, WordPool};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_entries_are_valid_words() {
        for &word in DICTIONARY {
            assert!(Word::new(word).is_ok(), "'{word}' is not a valid word");
            assert_eq!(word, word.to_lowercase(), "'{word}' is not lowercase");
        }
    }

    #[test]
    fn embedded_pool_parses_without_fallback() {
        let pool = WordPool::from_json(POOL_JSON).unwrap();
        assert_ne!(pool, WordPool::fallback());
    }

    #[test]
    fn embedded_pool_targets_are_guessable() {
        let dictionary = Dictionary::from_words(DICTIONARY);
        let pool = WordPool::from_json(POOL_JSON).unwrap();
        for targets in pool.entries() {
            for target in targets {
                assert!(
                    dictionary.is_valid(target.text()),
                    "target {target} missing from dictionary"
                );
            }
        }
    }

    #[test]
    fn fallback_targets_are_guessable() {
        let dictionary = Dictionary::from_words(DICTIONARY);
        for targets in WordPool::fallback().entries() {
            assert!(targets.iter().all(|t| dictionary.is_valid(t.text())));
        }
    }
}
