//! Cache Store Module
//!
//! Response-body cache keyed by normalized request path, with TTL
//! expiration. The key space is the finite set of route paths, so there is
//! no capacity bound: entries expire and are recomputed, never partially
//! updated.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// In-memory response cache with TTL expiration.
#[derive(Debug)]
pub struct CacheStore {
    /// Normalized request path -> cached response body
    entries: HashMap<String, CacheEntry>,
    /// Hit/miss/expiration counters
    stats: CacheStats,
    /// TTL in seconds applied to every stored entry
    default_ttl: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a store whose entries live for `default_ttl` seconds.
    pub fn new(default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
        }
    }

    // == Set ==
    /// Stores a response body under a normalized path key.
    ///
    /// An existing entry is overwritten and its TTL reset; concurrent
    /// writers for the same key follow last-write-wins.
    pub fn set(&mut self, key: String, body: String) {
        self.entries
            .insert(key, CacheEntry::new(body, self.default_ttl));
    }

    // == Get ==
    /// Retrieves a cached body by key, None on a miss.
    ///
    /// An entry whose TTL elapsed is dropped on read and the lookup counts
    /// as a miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.body.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Has ==
    /// Returns true if a live (non-expired) entry exists for the key,
    /// without touching the hit/miss counters.
    #[allow(dead_code)]
    pub fn has(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired())
    }

    // == Stats ==
    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    // == Cleanup Expired ==
    /// Drops every expired entry, returning how many were removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();
        self.stats.record_expirations(removed);
        removed
    }

    // == Length ==
    /// Current number of cached responses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    /// Plants an entry that expired in the past, bypassing the TTL clock.
    fn plant_stale(store: &mut CacheStore, key: &str) {
        store.entries.insert(
            key.to_string(),
            CacheEntry {
                body: "stale".to_string(),
                stored_at: 0,
                expires_at: 0,
            },
        );
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = CacheStore::new(300);
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_set_then_get_round_trips_the_body() {
        let mut store = CacheStore::new(300);

        store.set("/surah".to_string(), "{\"code\":200}".to_string());

        assert_eq!(store.get("/surah").as_deref(), Some("{\"code\":200}"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().hits, 1);
    }

    #[test]
    fn test_get_unknown_key_is_a_miss() {
        let mut store = CacheStore::new(300);

        assert!(store.get("/surah/999").is_none());
        assert_eq!(store.stats().misses, 1);
    }

    #[test]
    fn test_has_does_not_touch_counters() {
        let mut store = CacheStore::new(300);
        store.set("/juz/30".to_string(), "body".to_string());

        assert!(store.has("/juz/30"));
        assert!(!store.has("/juz/29"));

        let stats = store.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_overwrite_replaces_the_whole_body() {
        let mut store = CacheStore::new(300);

        store.set("/surah/1".to_string(), "first".to_string());
        store.set("/surah/1".to_string(), "second".to_string());

        assert_eq!(store.get("/surah/1").as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_expired_entry_is_dropped_on_read() {
        let mut store = CacheStore::new(1);
        store.set("/surah/1".to_string(), "body".to_string());

        assert!(store.get("/surah/1").is_some());

        sleep(Duration::from_millis(1100));

        assert!(store.get("/surah/1").is_none());
        assert!(!store.has("/surah/1"));
        assert_eq!(store.len(), 0);
        let stats = store.stats();
        assert_eq!(stats.expirations, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_cleanup_removes_only_expired_entries() {
        let mut store = CacheStore::new(300);
        store.set("/surah/1".to_string(), "keep".to_string());
        plant_stale(&mut store, "/surah/2");
        plant_stale(&mut store, "/juz/30");

        let removed = store.cleanup_expired();

        assert_eq!(removed, 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.stats().expirations, 2);
        assert_eq!(store.get("/surah/1").as_deref(), Some("keep"));
    }
}
