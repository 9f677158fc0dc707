use tiny_http::Request;

use grayscale_service::{grayscale, ServiceResponse};

use crate::handlers::{read_body, reject, HandlerError};
use crate::routes::{pixels_response, HttpResponse};
use crate::state::ServiceState;
use crate::util::query::{parse_query, query_u32};

// ---------------------------------------------------------------------------
// POST /grayscale?width=W&height=H
// ---------------------------------------------------------------------------

/// Bare-bytes variant of `/message`: the body is the pixel buffer and the
/// dimensions come from the query string.
pub fn handle(request: &mut Request, query: &str, state: &ServiceState) -> HttpResponse {
    match read_body(request, state.config.max_body_bytes).and_then(|body| process(&body, query)) {
        Ok(response) => {
            state.stats.record_converted(response.pixels.len());
            pixels_response(response.pixels, response.width, response.height)
        }
        Err(e) => reject(state, e),
    }
}

pub fn process(body: &[u8], query: &str) -> Result<ServiceResponse, HandlerError> {
    let pairs = parse_query(query);
    let width = query_u32(&pairs, "width").map_err(HandlerError::bad_query)?;
    let height = query_u32(&pairs, "height").map_err(HandlerError::bad_query)?;

    let pixels = grayscale(body, width, height)?;
    Ok(ServiceResponse { pixels, height, width })
}
