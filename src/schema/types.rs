//! Wire and domain types for interaction events
//!
//! Inbound JSON is first decoded into [`RawEvent`], where every field is an
//! optional string. The validator turns a `RawEvent` into a typed [`Event`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of user interaction carried by an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// An ad was shown
    Impression,
    /// A product was added to the cart
    AddToCart,
    /// A page was viewed
    PageView,
}

impl EventType {
    /// All accepted event types, in wire order
    pub const ALL: [EventType; 3] = [EventType::Impression, EventType::AddToCart, EventType::PageView];

    /// Returns the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Impression => "impression",
            EventType::AddToCart => "add_to_cart",
            EventType::PageView => "page_view",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// An event exactly as it arrived on the wire.
///
/// Absent and `null` fields decode as `None` so the validator can report
/// them by name. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(default, alias = "event")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub visitor_id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub page_url: Option<String>,
    #[serde(default)]
    pub ad_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// Request body of the write endpoint: `{ "events": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestRequest {
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

impl IngestRequest {
    pub fn new(events: Vec<RawEvent>) -> Self {
        Self { events }
    }
}

/// A validated interaction event.
///
/// This is also the stored document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_type: EventType,
    pub visitor_id: String,
    pub customer_id: String,
    pub page_url: String,
    pub ad_id: String,
    /// Canonical `YYYY-MM-DDTHH:MM:SSZ` once normalized
    pub timestamp: String,
    pub user_agent: String,
}
