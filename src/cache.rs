//! # Result Cache
//! Time-bounded map for recently computed results, keyed by a
//! caller-chosen identifier. Entries expire after a fixed TTL: `get`
//! evicts lazily on lookup, and `sweep` is the eager pass a caller's
//! scheduling loop can run. No global state is involved.

use std::{
    collections::HashMap,
    sync::Mutex,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use crate::result::SentimentResult;

#[derive(Debug, Clone, Copy)]
struct Entry {
    value: SentimentResult,
    inserted_at: u64,
}

/// Thread-safe TTL cache for sentiment results.
#[derive(Debug)]
pub struct ResultCache {
    inner: Mutex<HashMap<String, Entry>>,
    ttl: Duration,
}

impl ResultCache {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Store a result under `key`. If `ts_unix` is `None`, current time
    /// is used. Re-inserting an existing key refreshes its timestamp.
    pub fn insert(&self, key: impl Into<String>, value: SentimentResult, ts_unix: Option<u64>) {
        let ts = ts_unix.unwrap_or_else(now_unix);
        let mut inner = self.inner.lock().expect("result cache mutex poisoned");
        inner.insert(
            key.into(),
            Entry {
                value,
                inserted_at: ts,
            },
        );
    }

    /// Fetch a live entry. Expired entries are evicted on the way out
    /// and reported as absent.
    pub fn get(&self, key: &str) -> Option<SentimentResult> {
        let now = now_unix();
        let mut inner = self.inner.lock().expect("result cache mutex poisoned");
        match inner.get(key) {
            Some(entry) if !self.expired(entry, now) => Some(entry.value),
            Some(_) => {
                inner.remove(key);
                None
            }
            None => None,
        }
    }

    /// Eager eviction pass; returns how many entries were dropped.
    pub fn sweep(&self) -> usize {
        let now = now_unix();
        let mut inner = self.inner.lock().expect("result cache mutex poisoned");
        let before = inner.len();
        inner.retain(|_, entry| now.saturating_sub(entry.inserted_at) <= self.ttl.as_secs());
        before - inner.len()
    }

    /// Number of entries currently held, expired or not.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("result cache mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn expired(&self, entry: &Entry, now: u64) -> bool {
        now.saturating_sub(entry.inserted_at) > self.ttl.as_secs()
    }
}

/// Current UNIX time in seconds.
fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0))
        .as_secs()
}
