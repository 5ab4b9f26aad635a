//! Ingest HTTP Routes
//!
//! `PUT /` with body `{ "events": [...] }`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::put,
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::ingest::{BatchHandler, IngestError, IngestReceipt};
use crate::schema::IngestRequest;

// ==================
// Shared State
// ==================

/// Ingest state shared across handlers
pub struct IngestState {
    pub handler: BatchHandler,
}

impl IngestState {
    pub fn new(handler: BatchHandler) -> Self {
        Self { handler }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestResponse {
    pub message: String,
    pub accepted: usize,
    pub batch_id: Uuid,
}

impl From<IngestReceipt> for IngestResponse {
    fn from(receipt: IngestReceipt) -> Self {
        Self {
            message: "Events synced successfully!".to_string(),
            accepted: receipt.accepted,
            batch_id: receipt.batch_id,
        }
    }
}

// ==================
// Ingest Routes
// ==================

/// Create ingest routes
pub fn ingest_routes(state: Arc<IngestState>) -> Router {
    Router::new()
        .route("/", put(ingest_handler))
        .with_state(state)
}

async fn ingest_handler(
    State(state): State<Arc<IngestState>>,
    payload: Result<Json<IngestRequest>, JsonRejection>,
) -> Result<Json<IngestResponse>, IngestError> {
    let Json(request) = payload.map_err(rejection_error)?;
    let receipt = state.handler.handle(request).await?;
    Ok(Json(IngestResponse::from(receipt)))
}

/// Map axum's body rejections onto the ingest taxonomy
fn rejection_error(rejection: JsonRejection) -> IngestError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        IngestError::PayloadTooLarge(rejection.body_text())
    } else {
        IngestError::MalformedRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_from_receipt() {
        let receipt = IngestReceipt {
            batch_id: Uuid::nil(),
            accepted: 3,
        };

        let json = serde_json::to_value(IngestResponse::from(receipt)).unwrap();
        assert_eq!(json["message"], "Events synced successfully!");
        assert_eq!(json["accepted"], 3);
        assert_eq!(json["batchId"], "00000000-0000-0000-0000-000000000000");
    }
}
