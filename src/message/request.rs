use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, InputError};
use crate::pixel::buffer::PixelBuffer;
use crate::pixel::dimensions::ImageDimensions;

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Commands a client may send. Both currently run the grayscale transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Grayscale,
    Load,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Grayscale => "Grayscale",
            Command::Load => "Load",
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    /// Command names are matched exactly, including case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Grayscale" => Ok(Command::Grayscale),
            "Load" => Ok(Command::Load),
            other => Err(Error::UnknownCommand(other.to_owned())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Wire message
// ---------------------------------------------------------------------------

/// The message exactly as it arrives on the wire.
///
/// Every field is optional here so that a missing one can be reported by
/// name when converting into a [`ServiceRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixels: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl RawMessage {
    /// Convenience constructor for a fully populated message.
    pub fn new(command: &str, pixels: Vec<u8>, width: u32, height: u32) -> RawMessage {
        RawMessage {
            command: Some(command.to_owned()),
            pixels: Some(pixels),
            height: Some(height),
            width: Some(width),
        }
    }
}

// ---------------------------------------------------------------------------
// Validated request
// ---------------------------------------------------------------------------

/// Pixels plus the dimensions they were checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub pixels: PixelBuffer,
    pub dimensions: ImageDimensions,
}

impl ImagePayload {
    /// Validates that `pixels` is exactly `width * height` BGRA8 pixels.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Result<ImagePayload, InputError> {
        let dimensions = ImageDimensions::new(width, height)?;
        dimensions.check_len(pixels.len())?;
        let pixels = PixelBuffer::new(pixels)?;
        Ok(ImagePayload { pixels, dimensions })
    }
}

/// A request whose command is known and whose payload has the right shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceRequest {
    Grayscale(ImagePayload),
    /// Handled exactly like `Grayscale`.
    Load(ImagePayload),
}

impl ServiceRequest {
    pub fn new(command: Command, payload: ImagePayload) -> ServiceRequest {
        match command {
            Command::Grayscale => ServiceRequest::Grayscale(payload),
            Command::Load => ServiceRequest::Load(payload),
        }
    }

    pub fn command(&self) -> Command {
        match self {
            ServiceRequest::Grayscale(_) => Command::Grayscale,
            ServiceRequest::Load(_) => Command::Load,
        }
    }

    pub fn payload(&self) -> &ImagePayload {
        match self {
            ServiceRequest::Grayscale(p) | ServiceRequest::Load(p) => p,
        }
    }

    pub fn into_payload(self) -> ImagePayload {
        match self {
            ServiceRequest::Grayscale(p) | ServiceRequest::Load(p) => p,
        }
    }
}

impl TryFrom<RawMessage> for ServiceRequest {
    type Error = Error;

    /// The command is resolved first, so an unknown command is reported as
    /// such even when the payload fields are missing too.
    fn try_from(raw: RawMessage) -> Result<Self, Self::Error> {
        let command: Command = raw
            .command
            .ok_or(InputError::MissingField("Command"))?
            .parse()?;
        let pixels = raw.pixels.ok_or(InputError::MissingField("Pixels"))?;
        let height = raw.height.ok_or(InputError::MissingField("Height"))?;
        let width = raw.width.ok_or(InputError::MissingField("Width"))?;

        let payload = ImagePayload::new(pixels, width, height)?;
        Ok(ServiceRequest::new(command, payload))
    }
}
