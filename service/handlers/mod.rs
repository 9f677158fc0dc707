pub mod message;
pub mod raw;
pub mod status;

use log::warn;
use thiserror::Error;
use tiny_http::Request;

use crate::routes::{error_response, HttpResponse};
use crate::state::ServiceState;
use crate::util::body::{read_limited, BodyError};

/// Everything a handler can fail with, mapped onto an HTTP status.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("{message}")]
    BadRequest { kind: &'static str, message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    pub fn bad_query(message: String) -> Self {
        HandlerError::BadRequest { kind: "invalid_query", message }
    }

    pub fn status(&self) -> u16 {
        match self {
            HandlerError::PayloadTooLarge { .. } => 413,
            HandlerError::BadRequest { .. } => 400,
            HandlerError::Internal(_) => 500,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            HandlerError::PayloadTooLarge { .. } => "payload_too_large",
            HandlerError::BadRequest { kind, .. } => *kind,
            HandlerError::Internal(_) => "internal",
        }
    }

    pub fn into_response(self) -> HttpResponse {
        error_response(self.status(), self.kind(), &self.to_string())
    }
}

impl From<grayscale_service::Error> for HandlerError {
    fn from(e: grayscale_service::Error) -> Self {
        HandlerError::BadRequest { kind: e.kind(), message: e.to_string() }
    }
}

impl From<BodyError> for HandlerError {
    fn from(e: BodyError) -> Self {
        match e {
            BodyError::TooLarge { limit } => HandlerError::PayloadTooLarge { limit },
            io @ BodyError::Io(_) => HandlerError::BadRequest {
                kind: "unreadable_body",
                message: io.to_string(),
            },
        }
    }
}

/// Reads the request body, enforcing the configured size limit.
pub fn read_body(request: &mut Request, limit: usize) -> Result<Vec<u8>, HandlerError> {
    let declared = request.body_length();
    Ok(read_limited(request.as_reader(), declared, limit)?)
}

/// Counts and logs a rejected request, then renders its error response.
pub fn reject(state: &ServiceState, err: HandlerError) -> HttpResponse {
    state.stats.record_rejected();
    warn!("rejected request ({}): {}", err.kind(), err);
    err.into_response()
}
