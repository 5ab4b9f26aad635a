//! # In-Memory Sink
//!
//! Keeps inserted events per collection in process memory. Each
//! `insert_many` lands all-or-nothing under a single lock.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::backend::EventSink;
use super::errors::{StorageError, StorageResult};
use crate::schema::Event;

#[derive(Debug, Default)]
pub struct MemorySink {
    collections: Mutex<HashMap<String, Vec<Event>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a collection's contents, in insertion order
    pub fn documents(&self, collection: &str) -> Vec<Event> {
        self.collections
            .lock()
            .map(|c| c.get(collection).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .map(|c| c.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

#[async_trait]
impl EventSink for MemorySink {
    async fn insert_many(&self, collection: &str, events: &[Event]) -> StorageResult<()> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| StorageError::Unavailable("memory sink lock poisoned".into()))?;

        collections
            .entry(collection.to_string())
            .or_default()
            .extend_from_slice(events);

        Ok(())
    }
}
