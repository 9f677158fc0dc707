use crate::error::{InputError, Result};
use crate::pixel::buffer::BYTES_PER_PIXEL;
use crate::pixel::dimensions::ImageDimensions;

// ---------------------------------------------------------------------------
// Per-pixel average
// ---------------------------------------------------------------------------

/// Truncating mean of three channels.
///
/// The sum of three `u8` values is at most 765, so `u16` never overflows and
/// the quotient always fits back into a `u8`.
#[inline]
pub fn average_channels(c0: u8, c1: u8, c2: u8) -> u8 {
    ((u16::from(c0) + u16::from(c1) + u16::from(c2)) / 3) as u8
}

/// Converts every whole pixel of an already validated buffer in place.
pub(crate) fn convert_aligned(pixels: &mut [u8]) {
    for px in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
        let gray = average_channels(px[0], px[1], px[2]);
        px[..3].fill(gray);
    }
}

fn check_aligned(len: usize) -> Result<()> {
    if len % BYTES_PER_PIXEL != 0 {
        return Err(InputError::MisalignedLength { len }.into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Returns a grayscale copy of a packed 4-byte-per-pixel buffer.
///
/// Channels 0..3 of each pixel become their truncated average; channel 3
/// (alpha) is copied as is. `pixels` is not modified.
///
/// # Errors
/// `InvalidInput` if the length is not a multiple of 4. No partial output is
/// produced in that case.
pub fn grayscale_pixels(pixels: &[u8]) -> Result<Vec<u8>> {
    check_aligned(pixels.len())?;
    let mut out = pixels.to_vec();
    convert_aligned(&mut out);
    Ok(out)
}

/// Like [`grayscale_pixels`], writing into a caller-owned buffer of the same
/// length.
pub fn grayscale_pixels_into(src: &[u8], dst: &mut [u8]) -> Result<()> {
    check_aligned(src.len())?;
    if dst.len() != src.len() {
        return Err(InputError::OutputLengthMismatch {
            expected: src.len(),
            actual: dst.len(),
        }
        .into());
    }

    for (s, d) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
    {
        let gray = average_channels(s[0], s[1], s[2]);
        d[..3].fill(gray);
        d[3] = s[3];
    }
    Ok(())
}

/// Converts an exclusively borrowed buffer in place.
pub fn grayscale_in_place(pixels: &mut [u8]) -> Result<()> {
    check_aligned(pixels.len())?;
    convert_aligned(pixels);
    Ok(())
}

/// Converts a `width x height` BGRA8 image.
///
/// Width and height are only used to check that `pixels` holds exactly
/// `width * height * 4` bytes; they are the caller's bookkeeping otherwise.
pub fn grayscale(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let dims = ImageDimensions::new(width, height)?;
    dims.check_len(pixels.len())?;
    grayscale_pixels(pixels)
}
