//! Key-value persistence for the quiz profile
//!
//! The controller never touches a backend directly. It hands a computed
//! `Profile` to a `ProfileStore`, which serializes it under a single key of
//! any `KeyValueStore`.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::Result;
use crate::quiz::Profile;
use tracing::{debug, warn};

/// Storage key used by the original browser page
pub const DEFAULT_PROFILE_KEY: &str = "healthQuizProfile";

/// Synchronous string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn delete(&mut self, key: &str) -> Result<()>;
}

/// Typed profile access on top of a key-value store
pub struct ProfileStore<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_PROFILE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Load the stored profile
    ///
    /// A value that does not parse is reported and treated as absent.
    pub fn load(&self) -> Result<Option<Profile>> {
        let raw = match self.backend.get(&self.key)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        match Profile::from_json(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!(key = %self.key, error = %e, "ignoring malformed stored profile");
                Ok(None)
            }
        }
    }

    pub fn save(&mut self, profile: &Profile) -> Result<()> {
        let json = profile.to_json()?;
        self.backend.set(&self.key, &json)?;
        debug!(key = %self.key, answers = profile.answers.len(), "profile saved");
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.backend.delete(&self.key)?;
        debug!(key = %self.key, "profile cleared");
        Ok(())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Answer;
    use chrono::Utc;

    #[test]
    fn test_save_load_clear() {
        let mut store = ProfileStore::new(MemoryStore::new());
        assert!(store.load().unwrap().is_none());

        let profile = Profile::completed(vec![Answer::new("Q", "tempo")], Utc::now());
        store.save(&profile).unwrap();
        assert_eq!(store.load().unwrap(), Some(profile));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_malformed_value_treated_as_absent() {
        let mut backend = MemoryStore::new();
        backend.set(DEFAULT_PROFILE_KEY, "{not json").unwrap();

        let store = ProfileStore::new(backend);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_custom_key() {
        let mut store = ProfileStore::with_key(MemoryStore::new(), "other");
        let profile = Profile::completed(vec![], Utc::now());
        store.save(&profile).unwrap();

        assert!(store.backend().get("other").unwrap().is_some());
        assert!(store.backend().get(DEFAULT_PROFILE_KEY).unwrap().is_none());
    }
}
