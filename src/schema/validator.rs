//! Batch validator
//!
//! Validation semantics:
//! - A batch must contain at least one event
//! - Every field of every event must be present and non-empty
//! - `eventType` must be one of the accepted variants
//! - `pageUrl` must parse as an absolute URL
//!
//! Timestamp format is not checked here; see [`crate::timestamp`].
//! The first violation aborts validation of the whole batch.

use url::Url;

use super::errors::{ValidationError, ValidationResult};
use super::types::{Event, EventType, RawEvent};

/// Validates a whole batch, returning typed events in the original order.
///
/// # Errors
///
/// - `INGEST_EMPTY_BATCH` if `events` is empty
/// - the first per-event violation otherwise
pub fn validate_batch(events: &[RawEvent]) -> ValidationResult<Vec<Event>> {
    if events.is_empty() {
        return Err(ValidationError::empty_batch());
    }

    events
        .iter()
        .enumerate()
        .map(|(index, raw)| validate_event(index, raw))
        .collect()
}

/// Validates a single event at position `index`.
pub fn validate_event(index: usize, raw: &RawEvent) -> ValidationResult<Event> {
    let event_type = required(index, "eventType", &raw.event_type)?;
    let event_type: EventType = event_type
        .parse()
        .map_err(|actual: String| ValidationError::invalid_event_type(index, &actual))?;

    let visitor_id = required(index, "visitorId", &raw.visitor_id)?;
    let customer_id = required(index, "customerId", &raw.customer_id)?;

    let page_url = required(index, "pageUrl", &raw.page_url)?;
    Url::parse(page_url).map_err(|e| ValidationError::invalid_url(index, page_url, e))?;

    let ad_id = required(index, "adId", &raw.ad_id)?;
    let timestamp = required(index, "timestamp", &raw.timestamp)?;
    let user_agent = required(index, "userAgent", &raw.user_agent)?;

    Ok(Event {
        event_type,
        visitor_id: visitor_id.to_string(),
        customer_id: customer_id.to_string(),
        page_url: page_url.to_string(),
        ad_id: ad_id.to_string(),
        timestamp: timestamp.to_string(),
        user_agent: user_agent.to_string(),
    })
}

fn required<'a>(index: usize, field: &str, value: &'a Option<String>) -> ValidationResult<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::field_required(index, field)),
    }
}
