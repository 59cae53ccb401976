//! Resource loading with fallbacks
//!
//! Loading never fails from the caller's point of view: every resource has a
//! default that is used, with a warning, when the real one is unavailable.

use super::dictionary::Dictionary;
use super::embedded::{DICTIONARY, POOL_JSON};
use super::pool::WordPool;
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read or parse a word resource
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed puzzle pool: {0}")]
    Json(#[from] serde_json::Error),
    #[error("puzzle pool has no usable entries")]
    EmptyPool,
}

/// Run `load`, substituting `fallback()` if it fails
///
/// # Examples
/// ```
/// use cuordle::wordlists::loader::load_with_fallback;
///
/// let value = load_with_fallback("answer", || "x".parse::<u32>(), || 42);
/// assert_eq!(value, 42);
/// ```
pub fn load_with_fallback<T, E, L, F>(what: &str, load: L, fallback: F) -> T
where
    E: Display,
    L: FnOnce() -> Result<T, E>,
    F: FnOnce() -> T,
{
    match load() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(resource = what, error = %e, "load failed, using fallback");
            fallback()
        }
    }
}

/// Read a newline-delimited dictionary file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
pub fn read_dictionary_file(path: &Path) -> Result<Dictionary, LoadError> {
    let text = read(path)?;
    Ok(Dictionary::from_text(&text))
}

/// Read a JSON puzzle pool file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, is malformed, or has no usable entries.
pub fn read_pool_file(path: &Path) -> Result<WordPool, LoadError> {
    let text = read(path)?;
    WordPool::from_json(&text)
}

/// Load the dictionary from `path`, or the embedded one when no path is given
///
/// A failed file load degrades to an empty dictionary, which rejects every guess.
#[must_use]
pub fn load_dictionary(path: Option<&Path>) -> Dictionary {
    let dictionary = match path {
        Some(path) => {
            load_with_fallback("dictionary", || read_dictionary_file(path), Dictionary::empty)
        }
        None => Dictionary::from_words(DICTIONARY),
    };
    tracing::info!(words = dictionary.len(), "dictionary loaded");
    dictionary
}

/// Load the puzzle pool from `path`, or the embedded one when no path is given
///
/// Any failure degrades to the built-in two-puzzle pool.
#[must_use]
pub fn load_pool(path: Option<&Path>) -> WordPool {
    let pool = load_with_fallback(
        "puzzle pool",
        || match path {
            Some(path) => read_pool_file(path),
            None => WordPool::from_json(POOL_JSON),
        },
        WordPool::fallback,
    );
    tracing::info!(puzzles = pool.len(), "puzzle pool loaded");
    pool
}

/// Load pool and dictionary concurrently; returns once both are ready
#[must_use]
pub fn load_resources(pool: Option<&Path>, dictionary: Option<&Path>) -> (WordPool, Dictionary) {
    rayon::join(|| load_pool(pool), || load_dictionary(dictionary))
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
