//! # Storage Sinks
//!
//! Accepted batches are handed to an [`EventSink`] in one `insert_many`
//! call. The sink is built once at startup and injected into the batch
//! handler, so tests can swap MongoDB for [`MemorySink`].

mod backend;
mod errors;
mod memory;
mod mongo;

pub use backend::EventSink;
pub use errors::{StorageError, StorageResult};
pub use memory::MemorySink;
pub use mongo::{MongoConfig, MongoSink};
