use serde_json::{json, Value};

use crate::routes::{json_response, HttpResponse};
use crate::state::ServiceState;

/// `GET /status`
pub fn handle(state: &ServiceState) -> HttpResponse {
    json_response(200, status_body(state).to_string())
}

pub fn status_body(state: &ServiceState) -> Value {
    json!({
        "version": env!("CARGO_PKG_VERSION"),
        "max_body_bytes": state.config.max_body_bytes,
        "stats": state.stats.snapshot(),
    })
}
