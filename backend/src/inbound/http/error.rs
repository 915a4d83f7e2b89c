//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the JSON envelope
//! `{ "message": ..., "timestamp": <epoch-millis> }` with a matching status.

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::{DomainError, ErrorCode};
use crate::middleware::trace::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, DomainError>;

/// Client-facing message for a failed lookup.
pub const NOT_FOUND_MESSAGE: &str = "Person with this wasn't found!";

/// Client-facing message for failures whose cause must not leak.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// JSON error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "message": "Person with this wasn't found!",
    "timestamp": 1736931600000_i64
}))]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    pub message: String,
    /// Milliseconds since the Unix epoch when the error was produced.
    pub timestamp: i64,
}

impl ErrorResponse {
    /// Build an envelope stamped with the current time.
    pub fn now(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::NotCreated => StatusCode::BAD_REQUEST,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn client_message(error: &DomainError) -> String {
    match error {
        DomainError::NotFound => NOT_FOUND_MESSAGE.to_owned(),
        DomainError::NotCreated { message } => message.clone(),
        DomainError::ServiceUnavailable { .. } | DomainError::Internal { .. } => {
            error!(error = %error, "request failed");
            INTERNAL_MESSAGE.to_owned()
        }
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = TraceId::current() {
            builder.insert_header((TRACE_ID_HEADER, id.to_string()));
        }

        builder.json(ErrorResponse::now(client_message(self)))
    }
}

/// Reject request bodies that are not a valid person document.
///
/// Wired through `web::JsonConfig::error_handler` so malformed JSON produces
/// the same `400` envelope as a validation failure.
pub fn json_payload_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = %req.path(), error = %err, "rejected request body");
    DomainError::not_created(format!("body - {err};")).into()
}
