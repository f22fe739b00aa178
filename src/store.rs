//! # Selection Store Module
//!
//! Persistence for the user's per-slot event choices. A slot has at most
//! one selected event identifier, stored under the key
//! `slot_event_selected_<slot_id>` in a small JSON file in the platform
//! config directory.
//!
//! Absence is a normal state, never an error: a missing file, an unreadable
//! file or a corrupt entry all behave as "nothing selected". Write failures
//! are logged and the in-memory state carries on for the session.

use crate::error::StoreError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct SelectionStore {
    backing_file: PathBuf,
    entries: HashMap<String, String>,
}

impl SelectionStore {
    /// Default location of the selections file
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("talkboard").join("selections.json")
    }

    /// Open a store backed by `path`, loading any persisted selections.
    /// A missing or unreadable file yields an empty store.
    pub fn open(path: PathBuf) -> Self {
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(StoreError::ReadFailed(ref e)) if e.kind() == std::io::ErrorKind::NotFound => {
                HashMap::new()
            }
            Err(err) => {
                log::warn!("Ignoring selections file {:?}: {}", path, err);
                HashMap::new()
            }
        };

        Self {
            backing_file: path,
            entries,
        }
    }

    fn read_entries(path: &Path) -> Result<HashMap<String, String>, StoreError> {
        let contents = fs::read_to_string(path).map_err(StoreError::ReadFailed)?;
        serde_json::from_str(&contents).map_err(StoreError::ParseFailed)
    }

    fn key(slot_id: &str) -> String {
        format!("slot_event_selected_{}", slot_id)
    }

    /// The persisted event identifier for a slot, if any
    pub fn get(&self, slot_id: &str) -> Option<&str> {
        self.entries.get(&Self::key(slot_id)).map(String::as_str)
    }

    /// Persist `event_id` as the slot's selection, replacing any prior value
    pub fn set(&mut self, slot_id: &str, event_id: &str) {
        self.entries.insert(Self::key(slot_id), event_id.to_string());
        self.persist();
    }

    /// Remove any persisted selection for the slot
    pub fn clear(&mut self, slot_id: &str) {
        self.entries.remove(&Self::key(slot_id));
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.write_entries() {
            log::warn!(
                "Could not save selections to {:?}: {}",
                self.backing_file,
                err
            );
        }
    }

    fn write_entries(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.backing_file.parent() {
            fs::create_dir_all(parent).map_err(StoreError::WriteFailed)?;
        }

        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(StoreError::SerializeFailed)?;
        fs::write(&self.backing_file, json).map_err(StoreError::WriteFailed)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SelectionStore {
        SelectionStore::open(dir.path().join("selections.json"))
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        assert_eq!(store.get("slot-1"), None);
    }

    #[test]
    fn test_set_then_get() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = store_in(&dir);
        store.set("slot-1", "slot-1_Some%20talk");
        assert_eq!(store.get("slot-1"), Some("slot-1_Some%20talk"));
        assert_eq!(store.get("slot-2"), None);
    }

    #[test]
    fn test_set_overwrites_previous_selection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = store_in(&dir);
        store.set("slot-1", "slot-1_A");
        store.set("slot-1", "slot-1_B");
        assert_eq!(store.get("slot-1"), Some("slot-1_B"));
    }

    #[test]
    fn test_clear_removes_selection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = store_in(&dir);
        store.set("slot-1", "slot-1_A");
        store.clear("slot-1");
        assert_eq!(store.get("slot-1"), None);
        // clearing an absent key is not an error
        store.clear("slot-2");
    }

    #[test]
    fn test_selections_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("selections.json");
        {
            let mut store = SelectionStore::open(path.clone());
            store.set("slot-1", "slot-1_A");
        }
        let store = SelectionStore::open(path);
        assert_eq!(store.get("slot-1"), Some("slot-1_A"));
    }

    #[test]
    fn test_corrupt_file_behaves_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("selections.json");
        fs::write(&path, "not json at all {{{").expect("write");
        let store = SelectionStore::open(path);
        assert_eq!(store.get("slot-1"), None);
    }

    #[test]
    fn test_file_uses_prefixed_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("selections.json");
        let mut store = SelectionStore::open(path.clone());
        store.set("slot-0930", "slot-0930_A");
        let contents = fs::read_to_string(&path).expect("read");
        assert!(contents.contains("slot_event_selected_slot-0930"));
    }
}
