//! Time-bounded read cache.
//!
//! A cache hit may return data up to one TTL older than the latest
//! committed write; that staleness bound is part of the read-path
//! contract, not a defect.

use std::time::{Duration, Instant};

use dashmap::DashMap;

/// A concurrent map whose entries expire `ttl` after insertion.
#[derive(Debug)]
pub struct TtlCache<T> {
    entries: DashMap<String, (T, Instant)>,
    ttl: Duration,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Return the cached value for `key` if it is still within its TTL.
    /// Expired entries are removed on the way out.
    pub fn get(&self, key: &str) -> Option<T> {
        let expired = match self.entries.get(key) {
            Some(entry) => {
                let (value, inserted_at) = entry.value();
                if inserted_at.elapsed() < self.ttl {
                    return Some(value.clone());
                }
                true
            }
            None => false,
        };
        if expired {
            self.entries.remove(key);
        }
        None
    }

    /// Insert or replace the value for `key`, restarting its TTL.
    pub fn insert(&self, key: &str, value: T) {
        self.entries.insert(key.to_string(), (value, Instant::now()));
    }

    /// Drop every entry, forcing the next read to hit the store.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
