use serde::Serialize;

use crate::error::InputError;
use crate::pixel::buffer::BYTES_PER_PIXEL;

/// Width and height of an image, both strictly positive.
///
/// The transform itself never looks at dimensions; they travel alongside the
/// pixels so the caller gets them back, and so the dimensioned entry points
/// can check `width * height * 4 == len` before converting anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ImageDimensions {
    width: u32,
    height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Result<ImageDimensions, InputError> {
        if width == 0 || height == 0 {
            return Err(InputError::ZeroDimension { width, height });
        }
        Ok(ImageDimensions { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels, or `None` if it overflows `usize`.
    pub fn pixel_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Expected buffer length in bytes for a BGRA8 image of this size.
    pub fn byte_len(&self) -> Result<usize, InputError> {
        self.pixel_count()
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(InputError::DimensionOverflow { width: self.width, height: self.height })
    }

    /// Checks that a buffer of `len` bytes holds exactly this many pixels.
    pub fn check_len(&self, len: usize) -> Result<(), InputError> {
        let expected = self.byte_len()?;
        if expected != len {
            return Err(InputError::DimensionMismatch {
                width: self.width,
                height: self.height,
                expected,
                actual: len,
            });
        }
        Ok(())
    }
}
