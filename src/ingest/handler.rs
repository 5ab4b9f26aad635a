//! Batch handler
//!
//! validating → persisting. Any failure before the sink call discards the
//! whole batch; the sink is only ever called with a fully normalized batch.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::errors::{IngestError, IngestResult};
use crate::observability::LifecycleEvent;
use crate::schema::{self, Event, IngestRequest};
use crate::sink::EventSink;
use crate::timestamp;

/// Outcome of a persisted batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReceipt {
    pub batch_id: Uuid,
    pub accepted: usize,
}

/// Validates then normalizes a batch against `now`.
///
/// The whole batch is validated before any timestamp is looked at.
pub fn prepare_batch(request: &IngestRequest, now: DateTime<Utc>) -> IngestResult<Vec<Event>> {
    let mut events = schema::validate_batch(&request.events)?;

    for (index, event) in events.iter_mut().enumerate() {
        event.timestamp = timestamp::normalize_timestamp_at(&event.timestamp, now)
            .map_err(|e| IngestError::timestamp(index, e))?;
    }

    Ok(events)
}

/// Runs the write path for one batch at a time; shared across requests.
#[derive(Debug, Clone)]
pub struct BatchHandler {
    sink: Arc<dyn EventSink>,
    collection: String,
}

impl BatchHandler {
    pub fn new(sink: Arc<dyn EventSink>, collection: impl Into<String>) -> Self {
        Self {
            sink,
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Validate, normalize and persist a batch.
    ///
    /// # Errors
    ///
    /// - `Validation`, `InvalidTimestamp`, `FutureTimestamp`: nothing is written
    /// - `Storage`: the sink refused the write; no retry is attempted
    pub async fn handle(&self, request: IngestRequest) -> IngestResult<IngestReceipt> {
        let batch_id = Uuid::new_v4();
        let received = request.events.len();

        let events = prepare_batch(&request, Utc::now()).map_err(|e| {
            tracing::warn!(
                event = %LifecycleEvent::BatchRejected,
                batch_id = %batch_id,
                events = received,
                code = e.code(),
                error = %e,
                "batch rejected"
            );
            e
        })?;

        if let Err(e) = self.sink.insert_many(&self.collection, &events).await {
            tracing::error!(
                event = %LifecycleEvent::BatchFailed,
                batch_id = %batch_id,
                events = events.len(),
                collection = %self.collection,
                error = %e,
                "batch write failed"
            );
            return Err(IngestError::Storage(e));
        }

        tracing::info!(
            event = %LifecycleEvent::BatchAccepted,
            batch_id = %batch_id,
            events = events.len(),
            collection = %self.collection,
            "batch accepted"
        );

        Ok(IngestReceipt {
            batch_id,
            accepted: events.len(),
        })
    }
}
