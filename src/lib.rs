//! event-ingest - A strict ingestion shim for ad interaction events
//!
//! Accepts `{ "events": [...] }` batches over HTTP, validates every event,
//! normalizes timestamps and writes the batch to MongoDB in one call.

pub mod cli;
pub mod http_server;
pub mod ingest;
pub mod observability;
pub mod schema;
pub mod sink;
pub mod timestamp;
