//! Event schema and validation
//!
//! Every event in a batch must carry all seven fields, non-empty, with a
//! known `eventType` and a parseable `pageUrl`. A single violation rejects
//! the whole batch. Validation is pure and never mutates its input.

mod errors;
mod types;
mod validator;

pub use errors::{FieldViolation, ValidationError, ValidationErrorCode, ValidationResult};
pub use types::{Event, EventType, IngestRequest, RawEvent};
pub use validator::{validate_batch, validate_event};
