//! Batch ingestion
//!
//! Orchestrates the write path for one request:
//! schema validation → timestamp normalization → `insert_many`.
//!
//! # Design Principles
//!
//! - All-or-nothing: one bad event rejects the batch
//! - Fail fast on the first violation
//! - No retries; storage failures surface as server errors
//! - The sink is injected, never global

mod errors;
mod handler;

pub use errors::{ErrorResponse, IngestError, IngestResult};
pub use handler::{prepare_batch, BatchHandler, IngestReceipt};
