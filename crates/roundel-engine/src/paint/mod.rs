//! Paint model shared between the frame composer and rasterizers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, image sampled through a transform)
//! - stroke and highlight styles
//!
//! Geometry types remain in `coords`.

pub mod color;
mod style;

pub use color::Color;
pub use style::{HighlightStyle, StrokeStyle};

use crate::fit::SamplingTransform;
use crate::pixel_buffer::PixelBuffer;

/// Image paint: a borrowed pixel buffer sampled through `transform`.
///
/// Addressing is nearest-neighbor and clamp-to-edge on both axes: view
/// positions that map outside the source extent repeat the nearest edge pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePaint<'a> {
    pub image: &'a PixelBuffer,
    pub transform: SamplingTransform,
}

/// Paint source for filling geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint<'a> {
    Solid(Color),
    Image(ImagePaint<'a>),
}

impl<'a> Paint<'a> {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    #[inline]
    pub fn image(image: &'a PixelBuffer, transform: SamplingTransform) -> Self {
        Paint::Image(ImagePaint { image, transform })
    }
}
