//! Daily puzzle pool
//!
//! An ordered list of puzzle entries, each holding one target word per board.

use super::loader::LoadError;
use crate::core::{NUM_BOARDS, Word};
use serde::Deserialize;

/// The target words of one puzzle, one per board
pub type Targets = [Word; NUM_BOARDS];

/// Used whenever the real pool cannot be loaded
const FALLBACK_POOL: [[&str; NUM_BOARDS]; 2] = [
    ["salas", "morir", "muros", "pulir"],
    ["grano", "barbo", "obrar", "bravo"],
];

/// On-disk shape of the pool document
#[derive(Debug, Deserialize)]
struct PoolDocument {
    palabras: Vec<Vec<String>>,
}

/// Ordered, never-empty list of puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    entries: Vec<Targets>,
}

impl WordPool {
    /// Parse a pool document of the form `{"palabras": [[w1, w2, w3, w4], ...]}`
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Json` for malformed JSON and `LoadError::EmptyPool`
    /// when no entry survives validation.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let document: PoolDocument = serde_json::from_str(json)?;
        Self::from_entries(&document.palabras)
    }

    /// Build a pool from raw entries, skipping any that are not exactly
    /// `NUM_BOARDS` valid words
    ///
    /// # Errors
    ///
    /// Returns `LoadError::EmptyPool` if nothing usable remains.
    pub fn from_entries<E, S>(raw: &[E]) -> Result<Self, LoadError>
    where
        E: AsRef<[S]>,
        S: AsRef<str>,
    {
        let entries: Vec<Targets> = raw
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                let parsed = parse_entry(entry.as_ref());
                if parsed.is_none() {
                    tracing::warn!(entry = i, "skipping malformed puzzle entry");
                }
                parsed
            })
            .collect();

        if entries.is_empty() {
            return Err(LoadError::EmptyPool);
        }
        Ok(Self { entries })
    }

    /// The hard-coded two-puzzle pool
    #[must_use]
    pub fn fallback() -> Self {
        let entries = FALLBACK_POOL
            .iter()
            .filter_map(|entry| parse_entry(entry.as_slice()))
            .collect();
        Self { entries }
    }

    /// Targets for a challenge index (1-based; wraps around the pool)
    #[must_use]
    pub fn targets_for_day(&self, index: i64) -> Targets {
        let slot = (index - 1).rem_euclid(self.entries.len() as i64) as usize;
        self.entries[slot].clone()
    }

    #[must_use]
    pub fn entries(&self) -> &[Targets] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_entry<S: AsRef<str>>(entry: &[S]) -> Option<Targets> {
    if entry.len() != NUM_BOARDS {
        return None;
    }
    let words = entry
        .iter()
        .map(|w| Word::new(w.as_ref()).ok())
        .collect::<Option<Vec<Word>>>()?;
    words.try_into().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(targets: &Targets) -> Vec<&str> {
        targets.iter().map(Word::text).collect()
    }

    #[test]
    fn parses_document_and_uppercases() {
        let pool =
            WordPool::from_json(r#"{"palabras": [[" salas", "morir", "muros ", "PULIR"]]}"#)
                .unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(
            texts(&pool.targets_for_day(1)),
            ["SALAS", "MORIR", "MUROS", "PULIR"]
        );
    }

    #[test]
    fn targets_wrap_around_pool() {
        let pool = WordPool::fallback();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.targets_for_day(1)[0].text(), "SALAS");
        assert_eq!(pool.targets_for_day(2)[0].text(), "GRANO");
        assert_eq!(pool.targets_for_day(3)[0].text(), "SALAS");
        assert_eq!(pool.targets_for_day(10)[0].text(), "GRANO");
    }

    #[test]
    fn indices_before_epoch_still_resolve() {
        let pool = WordPool::fallback();
        assert_eq!(pool.targets_for_day(0)[0].text(), "GRANO");
        assert_eq!(pool.targets_for_day(-1)[0].text(), "SALAS");
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let json = r#"{"palabras": [
            ["salas", "morir", "muros"],
            ["salas", "morir", "muros", "larguisimo"],
            ["grano", "barbo", "obrar", "bravo"]
        ]}"#;
        let pool = WordPool::from_json(json).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.targets_for_day(1)[3].text(), "BRAVO");
    }

    #[test]
    fn empty_pool_is_an_error() {
        assert!(matches!(
            WordPool::from_json(r#"{"palabras": []}"#),
            Err(LoadError::EmptyPool)
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            WordPool::from_json("{\"palabras\": ["),
            Err(LoadError::Json(_))
        ));
        assert!(matches!(
            WordPool::from_json(r#"{"retos": []}"#),
            Err(LoadError::Json(_))
        ));
    }
}
