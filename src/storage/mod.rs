//! Persisted progress for the current day
//!
//! Only the date and the ordered guesses are stored. Restoring replays each
//! guess through the normal submission path, so every derived piece of state
//! is rebuilt exactly as it was produced live.

mod store;

pub use store::{FileStore, MemoryStore, StateStore};

use crate::game::GameSession;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Name of the saved-state record
pub const STORAGE_KEY: &str = "cuatroPalabrasState";

/// One day's saved progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    pub date: NaiveDate,
    pub guesses: Vec<String>,
}

impl SavedState {
    /// Capture the guesses of `session`, stamped with `date`
    #[must_use]
    pub fn from_session(session: &GameSession<'_>, date: NaiveDate) -> Self {
        Self {
            date,
            guesses: session
                .guesses()
                .iter()
                .map(|g| g.text().to_string())
                .collect(),
        }
    }
}

/// Failure to read or write saved progress
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("saved state I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("saved state is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

/// Replay today's saved guesses into a fresh session
///
/// A record from another day is discarded. Saved guesses the session rejects
/// are skipped. Returns the number of guesses replayed.
///
/// # Errors
///
/// Returns `StorageError` if the store cannot be read or cleared.
pub fn restore_session<S: StateStore + ?Sized>(
    session: &mut GameSession<'_>,
    store: &mut S,
    today: NaiveDate,
) -> Result<usize, StorageError> {
    let Some(saved) = store.load()? else {
        return Ok(0);
    };

    if saved.date != today {
        tracing::info!(saved = %saved.date, %today, "discarding progress from another day");
        store.clear()?;
        return Ok(0);
    }

    let mut replayed = 0;
    for guess in &saved.guesses {
        match session.submit_guess(guess) {
            Ok(_) => replayed += 1,
            Err(e) => tracing::warn!(%guess, error = %e, "skipping saved guess"),
        }
    }
    tracing::info!(replayed, "restored saved progress");
    Ok(replayed)
}

/// Overwrite the stored record with the session's current guesses
///
/// # Errors
///
/// Returns `StorageError` if the store cannot be written.
pub fn save_session<S: StateStore + ?Sized>(
    session: &GameSession<'_>,
    store: &mut S,
    today: NaiveDate,
) -> Result<(), StorageError> {
    store.save(&SavedState::from_session(session, today))?;
    tracing::debug!(guesses = session.current_turn(), "progress saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameConfig;
    use crate::wordlists::Dictionary;

    const TARGETS: [&str; 4] = ["salas", "morir", "muros", "pulir"];

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_words(TARGETS.iter().chain(&["perro", "gatos", "grano"]))
    }

    fn session(dictionary: &Dictionary) -> GameSession<'_> {
        GameSession::new(
            TARGETS.map(|t| Word::new(t).unwrap()),
            dictionary,
            GameConfig::default(),
        )
    }

    #[test]
    fn replays_same_day_guesses() {
        let dict = dictionary();
        let mut store = MemoryStore::new();
        let mut live = session(&dict);
        for guess in ["perro", "salas", "gatos"] {
            live.submit_guess(guess).unwrap();
            save_session(&live, &mut store, date(16)).unwrap();
        }

        let mut restored = session(&dict);
        assert_eq!(restore_session(&mut restored, &mut store, date(16)).unwrap(), 3);
        assert_eq!(restored.guesses(), live.guesses());
        assert_eq!(restored.tracker(), live.tracker());
        assert_eq!(restored.status(), live.status());
    }

    #[test]
    fn discards_other_day() {
        let dict = dictionary();
        let mut store = MemoryStore::new();
        store
            .save(&SavedState {
                date: date(15),
                guesses: vec!["SALAS".to_string()],
            })
            .unwrap();

        let mut game = session(&dict);
        assert_eq!(restore_session(&mut game, &mut store, date(16)).unwrap(), 0);
        assert_eq!(game.current_turn(), 0);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn skips_rejected_guesses() {
        let dict = dictionary();
        let mut store = MemoryStore::new();
        store
            .save(&SavedState {
                date: date(16),
                guesses: vec!["SALAS".into(), "XXXXX".into(), "SAL".into(), "MORIR".into()],
            })
            .unwrap();

        let mut game = session(&dict);
        assert_eq!(restore_session(&mut game, &mut store, date(16)).unwrap(), 2);
        assert_eq!(game.boards()[1].solved_at(), Some(2));
    }

    #[test]
    fn empty_store_restores_nothing() {
        let dict = dictionary();
        let mut game = session(&dict);
        let mut store = MemoryStore::new();
        assert_eq!(restore_session(&mut game, &mut store, date(16)).unwrap(), 0);
    }

    #[test]
    fn works_through_trait_objects() {
        let dict = dictionary();
        let mut game = session(&dict);
        game.submit_guess("grano").unwrap();

        let mut store: Box<dyn StateStore> = Box::new(MemoryStore::new());
        save_session(&game, store.as_mut(), date(16)).unwrap();
        assert_eq!(store.load().unwrap().unwrap().guesses, vec!["GRANO"]);
    }
}
