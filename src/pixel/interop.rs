//! Conversions between [`PixelBuffer`] and the `image` crate's in-memory
//! `RgbaImage`.
//!
//! Only raw buffers move across; nothing here decodes or encodes a file
//! format. `RgbaImage` stores RGBA while the service usually sees BGRA, which
//! is harmless because grayscale averaging treats the three colour channels
//! symmetrically.
use image::RgbaImage;

use crate::error::InputError;
use crate::pixel::buffer::PixelBuffer;
use crate::pixel::dimensions::ImageDimensions;

/// Splits an `RgbaImage` into its pixel buffer and dimensions.
pub fn from_rgba_image(image: RgbaImage) -> Result<(PixelBuffer, ImageDimensions), InputError> {
    let dims = ImageDimensions::new(image.width(), image.height())?;
    let buffer = PixelBuffer::new(image.into_raw())?;
    Ok((buffer, dims))
}

/// Reassembles an `RgbaImage`; fails if `dims` does not describe `buffer`.
pub fn into_rgba_image(buffer: PixelBuffer, dims: ImageDimensions) -> Result<RgbaImage, InputError> {
    dims.check_len(buffer.len())?;
    RgbaImage::from_raw(dims.width(), dims.height(), buffer.into_bytes())
        .ok_or(InputError::DimensionOverflow { width: dims.width(), height: dims.height() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn round_trips_through_rgba_image() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([30, 60, 90, 255]));
        image.put_pixel(1, 0, Rgba([0, 0, 3, 9]));

        let (buffer, dims) = from_rgba_image(image).unwrap();
        assert_eq!((dims.width(), dims.height()), (2, 1));

        let gray = into_rgba_image(buffer.into_grayscale(), dims).unwrap();
        assert_eq!(gray.get_pixel(0, 0), &Rgba([60, 60, 60, 255]));
        assert_eq!(gray.get_pixel(1, 0), &Rgba([1, 1, 1, 9]));
    }

    #[test]
    fn empty_image_has_no_dimensions() {
        let err = from_rgba_image(RgbaImage::new(0, 3)).unwrap_err();
        assert_eq!(err, InputError::ZeroDimension { width: 0, height: 3 });
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let buffer = PixelBuffer::new(vec![0; 8]).unwrap();
        let dims = ImageDimensions::new(3, 1).unwrap();
        assert!(matches!(
            into_rgba_image(buffer, dims),
            Err(InputError::DimensionMismatch { expected: 12, actual: 8, .. })
        ));
    }
}
