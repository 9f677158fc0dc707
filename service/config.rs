use clap::Parser;

pub const DEFAULT_ADDR: &str = "127.0.0.1:7878";
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Command-line flags; each one can also come from the environment.
#[derive(Debug, Parser)]
#[command(name = "grayscale-service", version, about = "Converts raw BGRA8 pixel buffers to grayscale over HTTP")]
pub struct Args {
    /// Address to listen on.
    #[arg(long, env = "GRAYSCALE_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,

    /// Largest request body accepted, in bytes.
    #[arg(long, env = "GRAYSCALE_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

/// Runtime settings for the service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub addr: String,
    pub max_body_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            addr: DEFAULT_ADDR.to_owned(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl From<Args> for ServiceConfig {
    fn from(args: Args) -> Self {
        ServiceConfig {
            addr: args.addr,
            max_body_bytes: args.max_body_bytes,
        }
    }
}
