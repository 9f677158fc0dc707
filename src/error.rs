use thiserror::Error;

/// Reasons a pixel buffer or message is rejected before any pixel is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Buffer length is not a whole number of 4-byte pixels.
    #[error("buffer length {len} is not a multiple of 4")]
    MisalignedLength { len: usize },

    #[error("{width}x{height} image needs {expected} bytes, got {actual}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("image dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    /// `width * height * 4` does not fit in `usize`.
    #[error("{width}x{height} image is too large to address")]
    DimensionOverflow { width: u32, height: u32 },

    #[error("output buffer holds {actual} bytes but the input has {expected}")]
    OutputLengthMismatch { expected: usize, actual: usize },

    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    /// The message body could not be parsed at all.
    #[error("malformed message: {0}")]
    MalformedMessage(String),
}

/// Errors surfaced to callers of the transform and the message dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),
}

impl Error {
    /// Stable snake_case label for transports that report errors by name.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "invalid_input",
            Error::UnknownCommand(_) => "unknown_command",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
