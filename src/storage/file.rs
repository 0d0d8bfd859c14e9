//! JSON-file key-value store
//!
//! Emulates browser local storage: one JSON object mapping keys to string
//! values. A missing or corrupt file reads as an empty store, and writes go
//! through a temp file so an interrupted write never truncates it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::KeyValueStore;
use crate::errors::Result;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries
    ///
    /// An unparseable file is reported and read as empty; the flag tells the
    /// caller the file must be rewritten.
    fn read_entries(&self) -> Result<(BTreeMap<String, String>, bool)> {
        if !self.path.exists() {
            return Ok((BTreeMap::new(), false));
        }

        let json = fs::read_to_string(&self.path)?;
        if json.trim().is_empty() {
            return Ok((BTreeMap::new(), false));
        }

        match serde_json::from_str(&json) {
            Ok(entries) => Ok((entries, false)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring corrupt storage file");
                Ok((BTreeMap::new(), true))
            }
        }
    }

    /// Replace the file through a sibling temp file and a rename
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!(path = %self.path.display(), entries = entries.len(), "storage file written");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "storage.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let (mut entries, _) = self.read_entries()?;
        Ok(entries.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let (mut entries, _) = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let (mut entries, corrupt) = self.read_entries()?;
        if entries.remove(key).is_some() || corrupt {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("nested").join("storage.json"));
        (store, temp_dir)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (store, _temp) = create_test_store();
        assert!(store.get("anything").unwrap().is_none());
    }

    #[test]
    fn test_set_get_delete() {
        let (mut store, _temp) = create_test_store();

        store.set("healthQuizProfile", "{\"answers\":[]}").unwrap();
        store.set("other", "x").unwrap();
        assert!(store.path().exists());
        assert_eq!(
            store.get("healthQuizProfile").unwrap().as_deref(),
            Some("{\"answers\":[]}")
        );

        store.delete("healthQuizProfile").unwrap();
        assert!(store.get("healthQuizProfile").unwrap().is_none());
        assert_eq!(store.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let (mut store, _temp) = create_test_store();
        store.set("k", "v").unwrap();

        let reopened = FileStore::new(store.path().to_path_buf());
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let (mut store, _temp) = create_test_store();
        store.set("k", "v").unwrap();
        fs::write(store.path(), "{\"healthQuizProfile\": \"{\\\"answ").unwrap();

        assert!(store.get("healthQuizProfile").unwrap().is_none());
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn test_delete_rewrites_corrupt_file() {
        let (mut store, _temp) = create_test_store();
        store.set("k", "v").unwrap();
        fs::write(store.path(), "{\"k\": ").unwrap();

        store.delete("k").unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(serde_json::from_str::<BTreeMap<String, String>>(&raw).unwrap().len(), 0);
    }

    #[test]
    fn test_set_replaces_corrupt_file() {
        let (mut store, _temp) = create_test_store();
        store.set("seed", "x").unwrap();
        fs::write(store.path(), "not json at all").unwrap();

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_delete_without_file() {
        let (mut store, _temp) = create_test_store();
        store.delete("k").unwrap();
        assert!(!store.path().exists());
    }
}
