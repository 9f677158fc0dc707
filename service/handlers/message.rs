use tiny_http::Request;

use grayscale_service::{handle_json, ServiceResponse};

use crate::handlers::{read_body, reject, HandlerError};
use crate::routes::{json_response, HttpResponse};
use crate::state::ServiceState;

// ---------------------------------------------------------------------------
// POST /message
// ---------------------------------------------------------------------------

/// Accepts `{"Command","Pixels","Height","Width"}` and replies with
/// `{"Pixels","Height","Width"}`.
pub fn handle(request: &mut Request, state: &ServiceState) -> HttpResponse {
    let response = match read_body(request, state.config.max_body_bytes).and_then(|body| process(&body)) {
        Ok(r) => r,
        Err(e) => return reject(state, e),
    };

    match serde_json::to_string(&response) {
        Ok(json) => {
            state.stats.record_converted(response.pixels.len());
            json_response(200, json)
        }
        Err(e) => reject(state, HandlerError::Internal(e.to_string())),
    }
}

pub fn process(body: &[u8]) -> Result<ServiceResponse, HandlerError> {
    Ok(handle_json(body)?)
}
