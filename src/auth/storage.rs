//! Persistent key/value storage, the way `localStorage` is used by the page.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::warn;

/// String storage that outlives the components reading it.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn clear(&self);
}

/// Shared in-memory storage. Clones see the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Reads a JSON value. Missing keys and undecodable values both yield `None`; the latter
/// is logged.
pub fn get_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(key, %error, "Error reading from storage");
            None
        }
    }
}

/// Like [`get_json`], falling back to `default`.
pub fn get_json_or<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, default: T) -> T {
    get_json(store, key).unwrap_or(default)
}

pub fn set_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), serde_json::Error> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        compact: bool,
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("token", "abc");

        assert_eq!(other.get("token").as_deref(), Some("abc"));
        other.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_json_round_trip_and_defaults() {
        let store = MemoryStore::new();
        set_json(&store, "prefs", &Prefs { compact: true }).unwrap();

        assert_eq!(get_json::<Prefs>(&store, "prefs"), Some(Prefs { compact: true }));
        assert_eq!(get_json::<Prefs>(&store, "missing"), None);
        assert_eq!(get_json_or(&store, "missing", 5u32), 5);
    }

    #[test]
    fn test_corrupt_json_falls_back() {
        let store = MemoryStore::new();
        store.set("prefs", "{not json");

        assert_eq!(get_json_or(&store, "prefs", Prefs { compact: false }), Prefs { compact: false });
    }
}
