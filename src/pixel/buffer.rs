use crate::error::InputError;
use crate::transform::grayscale::convert_aligned;

/// Bytes per packed BGRA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A packed buffer of 4-byte pixels `(C0, C1, C2, A)`.
///
/// The only invariant is the shape: the length is always a multiple of
/// [`BYTES_PER_PIXEL`]. Channel order does not matter to anything in this
/// crate, so BGRA and RGBA buffers are both fine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    bytes: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps `bytes`, rejecting lengths that would leave a partial pixel.
    pub fn new(bytes: Vec<u8>) -> Result<PixelBuffer, InputError> {
        if bytes.len() % BYTES_PER_PIXEL != 0 {
            return Err(InputError::MisalignedLength { len: bytes.len() });
        }
        Ok(PixelBuffer { bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn pixel_count(&self) -> usize {
        self.bytes.len() / BYTES_PER_PIXEL
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Iterates over pixels as `[C0, C1, C2, A]` arrays.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.bytes
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Returns a grayscale copy; `self` is left untouched.
    pub fn to_grayscale(&self) -> PixelBuffer {
        self.clone().into_grayscale()
    }

    /// Converts to grayscale reusing this buffer's allocation.
    pub fn into_grayscale(mut self) -> PixelBuffer {
        convert_aligned(&mut self.bytes);
        self
    }
}

impl TryFrom<Vec<u8>> for PixelBuffer {
    type Error = InputError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        PixelBuffer::new(bytes)
    }
}

impl AsRef<[u8]> for PixelBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<PixelBuffer> for Vec<u8> {
    fn from(buffer: PixelBuffer) -> Vec<u8> {
        buffer.bytes
    }
}
