//! Grocery Persistence
//!
//! Reads and writes the whole list as one JSON array under a fixed key.
//! Loading never fails and saving never reports errors.

use std::collections::HashSet;

use serde_json::Value;

use crate::models::Entry;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone)]
pub struct GroceryPersistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> GroceryPersistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    /// Stored entries, or an empty list if nothing usable is stored
    pub fn load(&self) -> Vec<Entry> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("grocery load from '{}' failed: {}", self.key, e);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(values)) => decode_entries(values),
            Ok(_) => {
                log::warn!("grocery data under '{}' is not an array, starting empty", self.key);
                Vec::new()
            }
            Err(e) => {
                log::warn!("grocery data under '{}' is malformed: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list; failures are logged and dropped
    pub fn save(&self, entries: &[Entry]) {
        let json = match serde_json::to_string(entries) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("grocery serialize failed: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &json) {
            log::warn!("grocery save to '{}' failed: {}", self.key, e);
        }
    }
}

/// Keep decodable entries with a non-blank name and a first-seen id
fn decode_entries(values: Vec<Value>) -> Vec<Entry> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter_map(|value| serde_json::from_value::<Entry>(value).ok())
        .filter_map(|mut entry| {
            let name = entry.name.trim();
            if name.is_empty() {
                return None;
            }
            entry.name = name.to_string();
            Some(entry)
        })
        .filter(|entry| seen.insert(entry.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, EntryId};
    use crate::storage::{MemoryStorage, StorageError, StorageResult};

    const KEY: &str = "grocery_test";

    struct BrokenStorage;

    impl KeyValueStore for BrokenStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable)
        }
        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Backend("quota exceeded".to_string()))
        }
        fn remove(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable)
        }
    }

    fn entry(id: &str, name: &str, completed: bool) -> Entry {
        Entry {
            id: EntryId::from(id),
            name: name.to_string(),
            quantity: 1.0,
            category: Category::Produce,
            completed,
        }
    }

    #[test]
    fn test_load_absent_is_empty() {
        let persistence = GroceryPersistence::new(MemoryStorage::new(), KEY);
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let storage = MemoryStorage::new();
        let persistence = GroceryPersistence::new(storage.clone(), KEY);

        storage.set(KEY, "{not json").unwrap();
        assert!(persistence.load().is_empty());

        storage.set(KEY, r#"{"id":"a","name":"Milk"}"#).unwrap();
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let persistence = GroceryPersistence::new(MemoryStorage::new(), KEY);
        let entries = vec![entry("a", "Milk", false), entry("b", "Bread", true), entry("c", "Eggs", false)];

        persistence.save(&entries);
        assert_eq!(persistence.load(), entries);
    }

    #[test]
    fn test_load_skips_bad_elements() {
        let storage = MemoryStorage::new();
        let persistence = GroceryPersistence::new(storage.clone(), KEY);
        storage
            .set(
                KEY,
                r#"[
                    {"id":"a","name":"  Milk  ","quantity":2,"category":"Dairy"},
                    {"id":"b","name":"   "},
                    {"name":"No id"},
                    7,
                    {"id":"a","name":"Duplicate"},
                    {"id":"c","name":"Bread","category":"Bogus"}
                ]"#,
            )
            .unwrap();

        let loaded = persistence.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Milk");
        assert_eq!(loaded[0].category, Category::Dairy);
        assert_eq!(loaded[1].id, EntryId::from("c"));
        assert_eq!(loaded[1].category, Category::Other);
    }

    #[test]
    fn test_broken_storage_is_silent() {
        let persistence = GroceryPersistence::new(BrokenStorage, KEY);
        assert!(persistence.load().is_empty());
        persistence.save(&[entry("a", "Milk", false)]);
    }
}
