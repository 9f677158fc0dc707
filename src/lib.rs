pub mod error;
pub mod pixel;
pub mod transform;
pub mod message;

// Convenience re-exports
pub use error::{Error, InputError, Result};
pub use pixel::buffer::{PixelBuffer, BYTES_PER_PIXEL};
pub use pixel::dimensions::ImageDimensions;
pub use transform::grayscale::{
    average_channels, grayscale, grayscale_in_place, grayscale_pixels, grayscale_pixels_into,
};
pub use message::request::{Command, ImagePayload, RawMessage, ServiceRequest};
pub use message::response::ServiceResponse;
pub use message::dispatch::{handle, handle_json, handle_message};
