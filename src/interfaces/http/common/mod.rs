//! Shared HTTP building blocks

mod api_json;

pub use api_json::{ApiJson, ApiJsonRejection};

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::shared::DomainError;

/// Error body returned by every endpoint: `{"message": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type ApiError = (StatusCode, Json<MessageResponse>);

/// Convert a domain error into its status and client-safe message.
///
/// Store and hashing failures are logged with their detail here; the client
/// only sees a generic message.
pub fn error_response(e: DomainError) -> ApiError {
    if e.is_internal() {
        error!(error = %e, "Account request failed");
    }
    (e.status_code(), Json(MessageResponse::new(e.client_message())))
}
