//! Key/value backends for saved progress

use super::{STORAGE_KEY, SavedState, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Where a day's progress is kept between runs
pub trait StateStore {
    /// Read the saved record, if any
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<SavedState>, StorageError>;

    /// Overwrite the saved record
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    fn save(&mut self, state: &SavedState) -> Result<(), StorageError>;

    /// Remove the saved record; removing a missing record is not an error
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if an existing record cannot be removed.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// JSON file named after the storage key, inside a state directory
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<Option<SavedState>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, state: &SavedState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(state)?)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// In-process store; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Option<SavedState>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<SavedState>, StorageError> {
        Ok(self.state.clone())
    }

    fn save(&mut self, state: &SavedState) -> Result<(), StorageError> {
        self.state = Some(state.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.state = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> SavedState {
        SavedState {
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            guesses: vec!["SALAS".to_string(), "OTOÑO".to_string()],
        }
    }

    #[test]
    fn file_store_round_trip_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(store.path().ends_with("cuatroPalabrasState.json"));
        assert_eq!(store.load().unwrap(), None);

        store.save(&record()).unwrap();
        assert_eq!(store.load().unwrap(), Some(record()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn file_store_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/state"));
        store.save(&record()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn file_store_format_is_date_and_guesses() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.save(&record()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(value["date"], "2026-10-16");
        assert_eq!(value["guesses"][1], "OTOÑO");
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        fs::write(store.path(), "{ not json").unwrap();
        assert!(matches!(store.load(), Err(StorageError::Json(_))));
    }

    #[test]
    fn memory_store_overwrites() {
        let mut store = MemoryStore::new();
        store.save(&record()).unwrap();
        let mut newer = record();
        newer.guesses.push("MUROS".to_string());
        store.save(&newer).unwrap();
        assert_eq!(store.load().unwrap().unwrap().guesses.len(), 3);
    }
}
