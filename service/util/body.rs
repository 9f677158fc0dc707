use std::io::Read;

use thiserror::Error;

/// Why a request body could not be read.
#[derive(Debug, Error)]
pub enum BodyError {
    /// Declared or actual size is above the configured limit.
    #[error("request body exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("could not read request body: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads at most `limit` bytes from `reader`.
///
/// A declared `Content-Length` over the limit is rejected before reading
/// anything. Without one, reading stops one byte past the limit so an
/// oversized chunked body never grows the buffer beyond `limit + 1`.
pub fn read_limited<R: Read>(
    reader: R,
    declared_len: Option<usize>,
    limit: usize,
) -> Result<Vec<u8>, BodyError> {
    if declared_len.map_or(false, |len| len > limit) {
        return Err(BodyError::TooLarge { limit });
    }

    let mut body = Vec::with_capacity(declared_len.unwrap_or(0));
    // Saturates so a limit of `usize::MAX` reads without bound.
    reader.take((limit as u64).saturating_add(1)).read_to_end(&mut body)?;

    if body.len() > limit {
        return Err(BodyError::TooLarge { limit });
    }
    Ok(body)
}
