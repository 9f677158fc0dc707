//! grayscale-service
//!
//! Converts raw BGRA8 pixel buffers to grayscale over HTTP. Served by a
//! synchronous tiny_http server, one thread per request.
//!
//! Run with:
//!   cargo run --release -- --addr 127.0.0.1:7878
//!
//! Routes:
//!   POST /message                      JSON {"Command","Pixels","Height","Width"}
//!   POST /grayscale?width=W&height=H   raw pixel bytes in, raw pixel bytes out
//!   GET  /status                       counters and limits

mod config;
mod state;
mod routes;
mod handlers;
mod util;

use std::sync::Arc;

use anyhow::anyhow;
use clap::Parser;
use log::info;
use tiny_http::Server;

use config::{Args, ServiceConfig};
use state::ServiceState;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServiceConfig::from(Args::parse());
    let server = Server::http(&config.addr)
        .map_err(|e| anyhow!("failed to bind HTTP server on {}: {}", config.addr, e))?;

    info!(
        "grayscale-service listening on http://{} (max body {} bytes)",
        config.addr, config.max_body_bytes
    );

    let shared_state = Arc::new(ServiceState::new(config));

    // Requests are independent, so each gets its own thread and a slow
    // upload never holds up the others.
    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }

    Ok(())
}
