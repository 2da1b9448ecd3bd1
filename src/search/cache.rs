//! Time-expiring, size-bounded result cache
//!
//! Entries are keyed by the lowercased raw query. When full, the entry with
//! the oldest insertion `timestamp` is evicted; reads do not refresh it.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::types::{CacheStats, LifeSituation};

/// Maximum number of cached queries
pub const CACHE_CAPACITY: usize = 50;

/// Lifetime of a cache entry in minutes
pub const CACHE_TTL_MINUTES: i64 = 30;

/// Fixed entry lifetime
pub fn cache_ttl() -> Duration {
    Duration::minutes(CACHE_TTL_MINUTES)
}

/// Cached results for one query
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Raw query as the caller typed it
    pub query: String,
    pub results: Vec<LifeSituation>,
    pub timestamp: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(query: String, results: Vec<LifeSituation>, timestamp: DateTime<Utc>) -> Self {
        Self {
            query,
            results,
            timestamp,
            expiration_date: timestamp + cache_ttl(),
        }
    }

    /// Live while `now` is before the expiration date
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expiration_date
    }
}

/// Normalize a raw query into its cache key
pub fn cache_key(query: &str) -> String {
    query.to_lowercase()
}

#[derive(Debug)]
pub struct ResultCache {
    entries: HashMap<String, CacheEntry>,
    capacity: usize,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::with_capacity(CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// Drop every entry whose expiration date is strictly before `now`.
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expiration_date >= now);
        before - self.entries.len()
    }

    /// Live results for a key. Expired entries are never returned, swept or not.
    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<&[LifeSituation]> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.results.as_slice())
    }

    /// Insert or replace the entry for `key`. Inserting a new key into a full
    /// cache evicts the entry with the oldest timestamp first.
    ///
    /// Returns the key of the evicted entry, if any.
    pub fn insert(&mut self, key: String, entry: CacheEntry) -> Option<String> {
        let mut evicted = None;
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            evicted = self.oldest_key();
            if let Some(oldest) = &evicted {
                self.entries.remove(oldest);
            }
        }
        self.entries.insert(key, entry);
        evicted
    }

    fn oldest_key(&self) -> Option<String> {
        self.entries
            .iter()
            .min_by_key(|(_, entry)| entry.timestamp)
            .map(|(key, _)| key.clone())
    }

    pub fn entry(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            cached_results: self.entries.values().map(|e| e.results.len()).sum(),
        }
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}
