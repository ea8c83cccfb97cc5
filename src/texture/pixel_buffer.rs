//! Validated RGBA8 pixel buffer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by malformed texture buffers.
#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Invalid texture dimensions: {0}x{1}")]
    InvalidDimensions(u32, u32),
    #[error("Texture data length mismatch: expected {expected} bytes, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },
}

/// An RGBA8 image treated read-only by the generation pipeline.
///
/// Pixel data is a flat row-major sequence of 4 interleaved 8-bit channels,
/// `width * height * 4` bytes long.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PixelBuffer {
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// Interleaved RGBA bytes, row-major.
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps raw RGBA bytes, rejecting zero dimensions or a length mismatch.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, TextureError> {
        let buffer = Self { width, height, data };
        buffer.validate()?;
        Ok(buffer)
    }

    /// Creates a single-color texture.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, TextureError> {
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self::new(width, height, data)
    }

    /// 4x4 neutral mid-gray texture, used when no source texture is supplied.
    pub fn neutral() -> Self {
        Self {
            width: 4,
            height: 4,
            data: [128u8, 128, 128, 255].iter().copied().cycle().take(4 * 4 * 4).collect(),
        }
    }

    /// Checks dimensions and data length.
    ///
    /// Buffers built elsewhere (deserialized, or assembled field by field)
    /// bypass [`new`](Self::new), so the pipeline re-validates at request
    /// entry rather than risk out-of-bounds sampling.
    pub fn validate(&self) -> Result<(), TextureError> {
        if self.width == 0 || self.height == 0 {
            return Err(TextureError::InvalidDimensions(self.width, self.height));
        }
        let expected = self.width as usize * self.height as usize * 4;
        if self.data.len() != expected {
            return Err(TextureError::DataLengthMismatch {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Returns the RGB channels of the pixel at `(x, y)` as floats.
    ///
    /// Alpha is never sampled by the pipeline.
    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> [f64; 3] {
        let i = (y * self.width + x) as usize * 4;
        [self.data[i] as f64, self.data[i + 1] as f64, self.data[i + 2] as f64]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            PixelBuffer::new(0, 4, vec![]),
            Err(TextureError::InvalidDimensions(0, 4))
        ));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = PixelBuffer::new(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            TextureError::DataLengthMismatch { expected: 16, actual: 15 }
        ));
    }

    #[test]
    fn test_solid_fill() {
        let tex = PixelBuffer::solid(3, 2, [10, 20, 30, 255]).unwrap();
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(tex.rgb(x, y), [10.0, 20.0, 30.0]);
            }
        }
    }
}
