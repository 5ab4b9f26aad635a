//! Timestamp normalization
//!
//! Event timestamps use one literal format, `YYYY-MM-DDTHH:MM:SSZ`:
//! UTC, second precision, no offsets. Anything else is rejected rather
//! than reinterpreted.

mod errors;
mod normalizer;

pub use errors::{TimestampError, TimestampResult};
pub use normalizer::{normalize_timestamp, normalize_timestamp_at, parse_timestamp, CANONICAL_FORMAT};
