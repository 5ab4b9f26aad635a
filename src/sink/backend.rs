//! # Event Sink Trait

use async_trait::async_trait;

use super::errors::StorageResult;
use crate::schema::Event;

/// Destination for accepted batches.
///
/// Implementations are shared across requests and must be safe to call
/// concurrently.
#[async_trait]
pub trait EventSink: Send + Sync + std::fmt::Debug {
    /// Insert `events` into `collection`, preserving their order.
    ///
    /// Callers never pass an empty slice.
    async fn insert_many(&self, collection: &str, events: &[Event]) -> StorageResult<()>;
}
