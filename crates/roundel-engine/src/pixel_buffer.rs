//! Host-owned decoded image data.
//!
//! The engine never decodes; hosts hand over row-major RGBA8 (straight alpha)
//! and keep ownership. Frames borrow the buffer read-only.

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

/// One straight-alpha RGBA8 sample.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    #[error("pixel buffer dimensions must be non-zero (got {width}x{height})")]
    EmptyDimensions { width: u32, height: u32 },
    #[error("pixel data length {actual} does not match {width}x{height} RGBA8 ({expected} bytes)")]
    LengthMismatch { width: u32, height: u32, expected: usize, actual: usize },
}

/// Decoded image, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl PixelBuffer {
    /// Wraps already-typed pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba8>) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::EmptyDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(PixelBufferError::LengthMismatch {
                width,
                height,
                expected: expected * 4,
                actual: pixels.len() * 4,
            });
        }
        Ok(Self { width, height, pixels })
    }

    /// Copies raw RGBA8 bytes (4 bytes per pixel, straight alpha).
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, PixelBufferError> {
        let expected = width as usize * height as usize * 4;
        let mismatch = PixelBufferError::LengthMismatch { width, height, expected, actual: bytes.len() };
        if bytes.len() != expected {
            return Err(mismatch);
        }
        let pixels: &[Rgba8] = bytemuck::try_cast_slice(bytes).map_err(|_| mismatch)?;
        Self::new(width, height, pixels.to_vec())
    }

    /// Buffer of a single repeated color.
    pub fn filled(width: u32, height: u32, px: Rgba8) -> Result<Self, PixelBufferError> {
        Self::new(width, height, vec![px; width as usize * height as usize])
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}
