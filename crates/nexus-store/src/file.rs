use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use nexus_ledger::State;

use crate::error::StoreError;

/// File-backed store for the collection document.
///
/// One instance owns one path. `load` and `save` move the whole document
/// at once; the caller holds the [`State`] in memory between them.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection from disk.
    ///
    /// A missing file surfaces as `StoreError::Io` with
    /// `ErrorKind::NotFound`; use [`JsonFileStore::load_or_default`]
    /// when an absent file should mean an empty collection.
    pub fn load(&self) -> Result<State, StoreError> {
        let raw = fs::read_to_string(&self.path)?;
        let state: State =
            serde_json::from_str(&raw).map_err(|e| StoreError::Parse(e.to_string()))?;
        debug!(
            path = %self.path.display(),
            items = state.store.len(),
            connections = state.connections.len(),
            events = state.event_log.len(),
            "collection loaded"
        );
        Ok(state)
    }

    /// Load the collection, treating a missing file as empty.
    pub fn load_or_default(&self) -> Result<State, StoreError> {
        match self.load() {
            Ok(state) => Ok(state),
            Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no collection file; starting empty");
                Ok(State::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Persist the collection to disk in one bulk write.
    pub fn save(&self, state: &State) -> Result<(), StoreError> {
        let encoded = serde_json::to_string_pretty(state)
            .map_err(|e| StoreError::Parse(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, encoded)?;
        debug!(
            path = %self.path.display(),
            events = state.event_log.len(),
            "collection saved"
        );
        Ok(())
    }

    /// Whether the backing file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_types::{Change, ModKind, RecordId, RecordKind, StoreItem};
    use std::io::Write;

    fn populated_state() -> State {
        let mut state = State::new();
        let identity = RecordId::generate(RecordKind::Store);
        let event_id = state.event_log.append(
            ModKind::Initial,
            None,
            vec![Change::new("Identity", identity.as_str())],
        );
        let now = chrono::Utc::now();
        state.store.push(StoreItem {
            identity,
            creation_time: now,
            last_modified_time: now,
            latest_event_id: event_id,
            file_location: "./a.txt".into(),
            checksum: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
                .into(),
        });
        state
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("collection.json"));

        let state = populated_state();
        store.save(&state).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn document_has_three_top_level_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collection.json");
        let store = JsonFileStore::new(&path);
        store.save(&populated_state()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value["store"].is_array());
        assert!(value["connections"].is_array());
        assert!(value["eventLog"].is_array());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        match store.load() {
            Err(StoreError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io(NotFound), got {other:?}"),
        }
    }

    #[test]
    fn load_or_default_treats_missing_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        let state = store.load_or_default().unwrap();
        assert!(state.store.is_empty());
        assert!(state.event_log.is_empty());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{{ not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Parse(_))));
        assert!(matches!(store.load_or_default(), Err(StoreError::Parse(_))));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/dir/collection.json"));
        store.save(&State::new()).unwrap();
        assert!(store.exists());
    }
}
