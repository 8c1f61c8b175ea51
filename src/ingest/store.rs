//! Storage seam for scored content. The real application persists via
//! its own ORM; the engine only requires a uniqueness constraint on the
//! external id and an all-or-nothing insert of one `ContentItem`.

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

use crate::ingest::types::ContentItem;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Uniqueness-constraint violation. Callers treat this as "already
    /// processed", never as fatal.
    #[error("content item already stored: {0}")]
    Duplicate(String),
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Minimal persistence contract consumed by the ingestion boundary.
pub trait ContentStore: Send + Sync {
    fn contains(&self, external_id: &str) -> bool;
    /// Persist one fully scored item as a single unit. Must fail with
    /// `StoreError::Duplicate` if the external id is already present.
    fn insert(&self, item: ContentItem) -> Result<(), StoreError>;
    fn get(&self, external_id: &str) -> Option<ContentItem>;
    fn len(&self) -> usize;
}

/// In-memory store for tests and embedders without a database.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<HashMap<String, ContentItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentStore for MemoryStore {
    fn contains(&self, external_id: &str) -> bool {
        self.inner
            .lock()
            .expect("memory store mutex poisoned")
            .contains_key(external_id)
    }

    fn insert(&self, item: ContentItem) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("memory store mutex poisoned");
        if inner.contains_key(&item.external_id) {
            return Err(StoreError::Duplicate(item.external_id));
        }
        inner.insert(item.external_id.clone(), item);
        Ok(())
    }

    fn get(&self, external_id: &str) -> Option<ContentItem> {
        self.inner
            .lock()
            .expect("memory store mutex poisoned")
            .get(external_id)
            .cloned()
    }

    fn len(&self) -> usize {
        self.inner.lock().expect("memory store mutex poisoned").len()
    }
}
