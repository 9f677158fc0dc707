use log::debug;

use crate::error::{InputError, Result};
use crate::message::request::{RawMessage, ServiceRequest};
use crate::message::response::ServiceResponse;

/// Runs one validated request.
///
/// Takes ownership of the request, so the payload buffer is converted in
/// place without anyone else holding a view of it.
pub fn handle(request: ServiceRequest) -> ServiceResponse {
    let command = request.command();
    let payload = request.into_payload();
    let dims = payload.dimensions;

    debug!(
        "{} {}x{} ({} bytes)",
        command,
        dims.width(),
        dims.height(),
        payload.pixels.len()
    );

    ServiceResponse {
        pixels: payload.pixels.into_grayscale().into_bytes(),
        height: dims.height(),
        width: dims.width(),
    }
}

/// Validates a wire message and handles it.
pub fn handle_message(raw: RawMessage) -> Result<ServiceResponse> {
    let request = ServiceRequest::try_from(raw)?;
    Ok(handle(request))
}

/// Parses a JSON message body and handles it.
pub fn handle_json(body: &[u8]) -> Result<ServiceResponse> {
    let raw: RawMessage = serde_json::from_slice(body)
        .map_err(|e| InputError::MalformedMessage(e.to_string()))?;
    handle_message(raw)
}
