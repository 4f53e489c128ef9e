//! In-memory cache store.
//!
//! Process-local backend holding one entry per key; contents are lost when
//! the process exits. The default choice for tests and for single-run tools
//! that only want hit/miss semantics without persistence.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::cache::validate_key;
use crate::core::traits::CacheStore;
use crate::core::types::{CacheEntry, CompiledConfig};
use crate::error::CacheError;

/// In-process `CacheStore` backed by a `HashMap`.
///
/// Interior mutability keeps the trait methods `&self`, so one store can be
/// shared across threads behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, CompiledConfig>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every stored entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &str) -> Result<CacheEntry, CacheError> {
        validate_key(key)?;
        Ok(match self.entries.read().get(key) {
            Some(config) => CacheEntry::hit(key, config.clone()),
            None => CacheEntry::miss(key),
        })
    }

    fn save(&self, entry: CacheEntry) -> Result<(), CacheError> {
        validate_key(entry.key())?;
        let (key, value) = entry.into_parts();
        match value {
            Some(config) => {
                self.entries.write().insert(key, config);
            }
            None => {
                // 값 없는 엔트리 저장은 슬롯 제거
                self.entries.write().remove(&key);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> CompiledConfig {
        [("debug".to_string(), json!(true))].into_iter().collect()
    }

    #[test]
    fn test_get_unknown_key_is_miss() {
        let store = MemoryStore::new();
        let entry = store.get("config_cache_item").unwrap();
        assert!(!entry.is_hit());
        assert_eq!(entry.key(), "config_cache_item");
    }

    #[test]
    fn test_save_then_get_round_trip() {
        let store = MemoryStore::new();
        store
            .save(CacheEntry::hit("config_cache_item", sample()))
            .unwrap();

        let entry = store.get("config_cache_item").unwrap();
        assert!(entry.is_hit());
        assert_eq!(entry.into_value(), Some(sample()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_replaces_existing_value() {
        let store = MemoryStore::new();
        store.save(CacheEntry::hit("k", sample())).unwrap();

        let replacement: CompiledConfig =
            [("debug".to_string(), json!(false))].into_iter().collect();
        store.save(CacheEntry::hit("k", replacement.clone())).unwrap();

        assert_eq!(store.get("k").unwrap().into_value(), Some(replacement));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_valueless_entry_clears_slot() {
        let store = MemoryStore::new();
        store.save(CacheEntry::hit("k", sample())).unwrap();
        store.save(CacheEntry::miss("k")).unwrap();

        assert!(!store.get("k").unwrap().is_hit());
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_config_stays_a_hit() {
        let store = MemoryStore::new();
        store
            .save(CacheEntry::hit("k", CompiledConfig::new()))
            .unwrap();

        let entry = store.get("k").unwrap();
        assert!(entry.is_hit());
        assert_eq!(entry.into_value(), Some(CompiledConfig::new()));
    }

    #[test]
    fn test_invalid_key_rejected_on_both_paths() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get("bad{key").unwrap_err(),
            CacheError::InvalidKey { .. }
        ));
        assert!(matches!(
            store.save(CacheEntry::miss("bad:key")).unwrap_err(),
            CacheError::InvalidKey { .. }
        ));
    }
}
