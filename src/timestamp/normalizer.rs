//! Parse, bound-check and re-serialize event timestamps

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike, Utc};
use regex::Regex;

use super::errors::{TimestampError, TimestampResult};

/// chrono format string for `YYYY-MM-DDTHH:MM:SSZ`
pub const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// chrono accepts unpadded fields and signed years; the shape check does not.
fn canonical_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z$")
            .expect("canonical timestamp pattern is valid")
    })
}

/// Parses a canonical timestamp into a UTC instant.
///
/// Rejects anything that is not exactly `YYYY-MM-DDTHH:MM:SSZ`, impossible
/// calendar dates and leap seconds.
pub fn parse_timestamp(raw: &str) -> TimestampResult<DateTime<Utc>> {
    if !canonical_shape().is_match(raw) {
        return Err(TimestampError::Invalid(raw.to_string()));
    }

    let naive = NaiveDateTime::parse_from_str(raw, CANONICAL_FORMAT)
        .map_err(|_| TimestampError::Invalid(raw.to_string()))?;

    // ":60" parses as a leap second with a nanosecond overflow
    if naive.nanosecond() != 0 {
        return Err(TimestampError::Invalid(raw.to_string()));
    }

    Ok(Utc.from_utc_datetime(&naive))
}

/// Normalizes `raw` against the current UTC instant.
pub fn normalize_timestamp(raw: &str) -> TimestampResult<String> {
    normalize_timestamp_at(raw, Utc::now())
}

/// Normalizes `raw`, rejecting instants strictly after `now`.
///
/// An instant equal to `now` is accepted.
pub fn normalize_timestamp_at(raw: &str, now: DateTime<Utc>) -> TimestampResult<String> {
    let parsed = parse_timestamp(raw)?;

    if parsed > now {
        return Err(TimestampError::Future(raw.to_string()));
    }

    Ok(parsed.format(CANONICAL_FORMAT).to_string())
}
